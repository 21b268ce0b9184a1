// SPDX-FileCopyrightText: 2026 Limn Contributors
// SPDX-License-Identifier: MIT

//! Limn — script-aware text logic for UI shells.
//!
//! This crate holds the rendering-framework-independent cores of a component
//! library: deriving a compact initials label for persona/avatar fallbacks, and
//! deciding whether a navigation link matches the current location. Everything
//! is a pure function over its arguments; there is no shared state, I/O, or
//! lifecycle.

pub mod nav;
pub mod persona;
