// SPDX-FileCopyrightText: 2026 Limn Contributors
// SPDX-License-Identifier: MIT

//! Navigation link selection.
//!
//! Decides whether a nav link should render as selected, either from an
//! explicitly selected key or by matching the link URL against the current
//! location. Link URLs are resolved against the location fresh on every call;
//! there is no resolver state shared between calls.

use url::{Position, Url};

/// A navigation link as supplied by the host application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLink {
    pub key: Option<String>,
    pub url: Option<String>,
}

impl NavLink {
    pub fn new(key: Option<&str>, url: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_owned),
            url: url.map(str::to_owned),
        }
    }
}

/// Selection inputs for [`is_link_selected`].
///
/// When `forced_key` is present it is the only thing consulted, so it can both
/// confirm and reject a link. `last_selected_key` records the most recent
/// click or address-bar selection and can only confirm a match; a mismatch
/// falls through to URL matching.
#[derive(Debug, Clone, Default)]
pub struct LinkSelection {
    pub forced_key: Option<String>,
    pub last_selected_key: Option<String>,
}

impl LinkSelection {
    pub fn forced(key: &str) -> Self {
        Self {
            forced_key: Some(key.to_owned()),
            ..Self::default()
        }
    }

    pub fn last_selected(key: &str) -> Self {
        Self {
            last_selected_key: Some(key.to_owned()),
            ..Self::default()
        }
    }
}

/// Whether `link` should render as selected.
///
/// `location` is the current document location; `None` means there is no
/// browsing context (e.g. server-side rendering), which disables URL matching.
/// A link URL that cannot be resolved against the location is treated as not
/// selected rather than an error.
pub fn is_link_selected(link: &NavLink, selection: &LinkSelection, location: Option<&Url>) -> bool {
    if let Some(forced) = selection.forced_key.as_deref() {
        return link.key.as_deref() == Some(forced);
    }

    if let (Some(selected), Some(key)) = (selection.last_selected_key.as_deref(), link.key.as_deref())
    {
        if key == selected {
            return true;
        }
    }

    let Some(location) = location else {
        return false;
    };
    let Some(link_url) = link.url.as_deref() else {
        return false;
    };

    let Ok(target) = location.join(link_url) else {
        return false;
    };

    if *location == target {
        return true;
    }

    // The location with query and fragment dropped may still match a target
    // that only names the path.
    if &location[..Position::AfterPath] == target.as_str() {
        return true;
    }

    if let Some(fragment) = location.fragment().filter(|f| !f.is_empty()) {
        // A literal hash link matches the fragment directly.
        if link_url.strip_prefix('#') == Some(fragment) {
            return true;
        }

        // Otherwise match the rebased fragment, e.g. `#/home` against a link
        // to `/home` under hash routing.
        if let Ok(rebased) = location.join(fragment) {
            return rebased == target;
        }
    }

    false
}
