// SPDX-FileCopyrightText: 2026 Limn Contributors
// SPDX-License-Identifier: MIT

//! Persona (avatar) text helpers.
//!
//! When a persona has no image, the widget falls back to a short label derived
//! from the display name. The extraction rule depends on the writing system of
//! the name and on the ambient text direction.

pub mod initials;
pub mod script;

pub use initials::get_initials;
pub use script::ScriptClass;
