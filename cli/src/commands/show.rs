// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use hostid_common::config::Config;
use hostid_common::utils::{mac, redact};
use serde::Serialize;

use crate::commands;
use crate::terminal::{colors, print};

#[derive(Serialize)]
struct ShowOutput {
    #[serde(flatten)]
    identity: hostid_common::models::localhost::LocalIdentity,
    vendor: Option<String>,
}

pub fn show(cfg: &Config) -> anyhow::Result<()> {
    let mut identity = commands::service(cfg).identity()?;
    let vendor: Option<String> = mac::vendor_of(&identity.mac);

    if cfg.redact {
        identity.mac = redact::mac_str(&identity.mac);
    }

    if cfg.json {
        return print::json(&ShowOutput { identity, vendor });
    }

    print::header("local identity");
    print::aligned_line("IPv4", identity.ip.to_string().color(colors::IPV4_ADDR));
    print::aligned_line("Range", identity.range.to_string().color(colors::TEXT_DEFAULT));
    match &identity.interface {
        Some(name) => print::aligned_line("Interface", name.color(colors::PRIMARY)),
        None => print::aligned_line("Interface", "unknown".dimmed()),
    }
    if identity.mac.is_empty() {
        print::aligned_line("MAC", "unknown".dimmed());
    } else {
        print::aligned_line("MAC", identity.mac.color(colors::MAC_ADDR));
    }
    if let Some(vendor) = vendor {
        print::aligned_line("Vendor", vendor.color(colors::TEXT_DEFAULT));
    }
    print::divider();
    Ok(())
}
