// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Resolves the host's intranet identity from the live OS network state.
//!
//! The free functions below query the real host with default settings. Use
//! [`localhost::LocalhostService`] directly to inject another
//! [`InterfaceRepository`](hostid_common::system::InterfaceRepository) or a
//! custom [`Config`](hostid_common::config::Config).

pub mod localhost;
pub mod system;

use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;

use hostid_common::error::Result;
pub use hostid_common::utils::ip::is_intranet;

use crate::localhost::LocalhostService;

/// Primary intranet IPv4 address of this host.
pub fn ip() -> Result<Ipv4Addr> {
    LocalhostService::system().ip()
}

/// Hardware address of the interface carrying [`ip`]; empty if it vanished.
pub fn mac_addr() -> Result<String> {
    LocalhostService::system().mac_addr()
}

pub fn intranet_interfaces() -> Result<Vec<NetworkInterface>> {
    LocalhostService::system().intranet_interfaces()
}
