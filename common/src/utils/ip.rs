// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Intranet address classification.
//!
//! Addresses are matched on their textual octets rather than with subnet
//! arithmetic, so `010.0.0.1` is *not* considered part of `10.0.0.0/8`.
//! Only the exact literal `127.0.0.1` counts as loopback.

use std::fmt;

use serde::Serialize;

/// The only loopback address treated as intranet.
pub const LOOPBACK_LITERAL: &str = "127.0.0.1";

/// Which private range an IPv4 address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntranetRange {
    /// Exactly `127.0.0.1`.
    Loopback,
    /// 10.0.0.0 -- 10.255.255.255
    ClassA,
    /// 172.16.0.0 -- 172.31.255.255
    ClassB,
    /// 192.168.0.0 -- 192.168.255.255
    ClassC,
    Public,
}

impl IntranetRange {
    pub fn is_intranet(self) -> bool {
        self != IntranetRange::Public
    }
}

impl fmt::Display for IntranetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntranetRange::Loopback => "loopback",
            IntranetRange::ClassA => "class-a",
            IntranetRange::ClassB => "class-b",
            IntranetRange::ClassC => "class-c",
            IntranetRange::Public => "public",
        };
        f.write_str(name)
    }
}

/// Classifies a dotted-quad string. Never fails: anything malformed is `Public`.
pub fn classify(ip: &str) -> IntranetRange {
    if ip == LOOPBACK_LITERAL {
        return IntranetRange::Loopback;
    }

    let octets: Vec<&str> = ip.split('.').collect();
    if octets.len() != 4 {
        return IntranetRange::Public;
    }

    match (octets[0], octets[1]) {
        ("10", _) => IntranetRange::ClassA,
        ("192", "168") => IntranetRange::ClassC,
        ("172", second) => match second.parse::<i64>() {
            Ok(16..=31) => IntranetRange::ClassB,
            _ => IntranetRange::Public,
        },
        _ => IntranetRange::Public,
    }
}

/// Checks and returns whether the given ip is an intranet ip.
///
/// * Local: 127.0.0.1
/// * A: 10.0.0.0 -- 10.255.255.255
/// * B: 172.16.0.0 -- 172.31.255.255
/// * C: 192.168.0.0 -- 192.168.255.255
pub fn is_intranet(ip: &str) -> bool {
    classify(ip).is_intranet()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
