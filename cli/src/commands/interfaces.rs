// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use hostid_common::config::Config;
use hostid_common::models::localhost::InterfaceSummary;
use hostid_common::utils::redact;
use hostid_common::utils::ip::classify;

use crate::commands;
use crate::terminal::{colors, print};

pub fn interfaces(cfg: &Config) -> anyhow::Result<()> {
    let mut summaries: Vec<InterfaceSummary> = commands::service(cfg).interface_summaries()?;

    if cfg.redact {
        for summary in &mut summaries {
            summary.mac = redact::mac_str(&summary.mac);
        }
    }

    if cfg.json {
        return print::json(&summaries);
    }

    print::header("intranet interfaces");
    for (idx, summary) in summaries.iter().enumerate() {
        print_summary(summary, idx);
    }
    print::divider();
    Ok(())
}

fn print_summary(summary: &InterfaceSummary, idx: usize) {
    print::tree_head(idx, &summary.name);

    let mut details: Vec<(String, ColoredString)> = summary
        .ipv4
        .iter()
        .map(|ip| {
            let range = classify(&ip.to_string());
            let value = format!(
                "{} {}",
                ip.to_string().color(colors::IPV4_ADDR),
                format!("({range})").color(colors::SEPARATOR)
            );
            ("IPv4".to_string(), value.normal())
        })
        .collect();

    if !summary.mac.is_empty() {
        details.push(("MAC".to_string(), summary.mac.color(colors::MAC_ADDR)));
    }

    print::as_tree(details);
}
