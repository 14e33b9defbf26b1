// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use hostid_common::config::Config;
use serde::Serialize;

use crate::commands;
use crate::terminal::print;

#[derive(Serialize)]
struct IpOutput {
    ip: String,
}

pub fn ip(cfg: &Config) -> anyhow::Result<()> {
    let ip = commands::service(cfg).ip()?;

    if cfg.json {
        return print::json(&IpOutput { ip: ip.to_string() });
    }

    print::plain(ip);
    Ok(())
}
