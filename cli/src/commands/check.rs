// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use hostid_common::config::Config;
use hostid_common::utils::ip::{IntranetRange, classify};
use serde::Serialize;

use crate::terminal::{colors, print};

#[derive(Serialize)]
struct Verdict<'a> {
    ip: &'a str,
    intranet: bool,
    range: IntranetRange,
}

/// Classifies each argument. Malformed input is reported as public, never
/// as an error.
pub fn check(addresses: &[String], cfg: &Config) -> anyhow::Result<()> {
    let verdicts: Vec<Verdict> = addresses
        .iter()
        .map(|ip| {
            let range = classify(ip);
            Verdict {
                ip,
                intranet: range.is_intranet(),
                range,
            }
        })
        .collect();

    if cfg.json {
        return print::json(&verdicts);
    }

    let width = addresses.iter().map(String::len).max().unwrap_or(0);
    for verdict in &verdicts {
        let label = if verdict.intranet {
            verdict.range.to_string().color(colors::INTRANET)
        } else {
            verdict.range.to_string().color(colors::PUBLIC)
        };
        println!("{:<width$}  {}", verdict.ip, label);
    }
    Ok(())
}
