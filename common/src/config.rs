// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

/// Runtime options for the identity lookup.
///
/// Constructed from CLI arguments; library callers usually take the default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interfaces whose name starts with any of these prefixes are ignored.
    ///
    /// Defaults to `["w-"]`, the naming scheme of container bridge devices
    /// created by the warden runtime.
    pub excluded_prefixes: Vec<String>,

    /// Masks hardware addresses in terminal output.
    pub redact: bool,

    /// Emits machine readable JSON instead of styled text.
    pub json: bool,
}

impl Config {
    pub fn is_excluded(&self, interface_name: &str) -> bool {
        self.excluded_prefixes
            .iter()
            .any(|prefix| interface_name.starts_with(prefix.as_str()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_prefixes: vec![String::from("w-")],
            redact: false,
            json: false,
        }
    }
}
