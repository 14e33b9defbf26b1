// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Local Host Identity Model
//!
//! Describes how the *local machine* identifies itself on the private
//! network: its primary intranet IPv4 address and the hardware address of
//! the interface carrying it.

use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;
use serde::Serialize;

use crate::utils::ip::{self, IntranetRange};
use crate::utils::mac::format_mac;

/// Snapshot of the host's intranet identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalIdentity {
    pub ip: Ipv4Addr,
    /// Empty when the interface carrying `ip` could not be re-found.
    pub mac: String,
    pub interface: Option<String>,
    pub range: IntranetRange,
}

impl LocalIdentity {
    pub fn new(ip: Ipv4Addr, mac: String, interface: Option<String>) -> Self {
        Self {
            range: ip::classify(&ip.to_string()),
            ip,
            mac,
            interface,
        }
    }
}

/// A usable interface with the IPv4 addresses it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceSummary {
    pub name: String,
    pub ipv4: Vec<Ipv4Addr>,
    pub mac: String,
}

impl InterfaceSummary {
    pub fn new(interface: &NetworkInterface, ipv4: Vec<Ipv4Addr>) -> Self {
        Self {
            name: interface.name.clone(),
            ipv4,
            mac: format_mac(interface.mac),
        }
    }
}
