// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use hostid_common::config::Config;
use hostid_common::utils::redact;
use serde::Serialize;

use crate::commands;
use crate::terminal::print;

#[derive(Serialize)]
struct MacOutput {
    mac: String,
}

/// Prints nothing when the carrying interface could not be re-found.
pub fn mac(cfg: &Config) -> anyhow::Result<()> {
    let mut mac = commands::service(cfg).mac_addr()?;
    if cfg.redact {
        mac = redact::mac_str(&mac);
    }

    if cfg.json {
        return print::json(&MacOutput { mac });
    }

    if !mac.is_empty() {
        print::plain(mac);
    }
    Ok(())
}
