// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

use hostid_common::debug;
use hostid_common::error::{LocalhostError, Result};
use hostid_common::system::InterfaceRepository;

/// Reads interfaces straight from the OS through `pnet::datalink`.
///
/// Every call re-queries the OS; nothing is cached between calls.
pub struct SystemRepo;

impl InterfaceRepository for SystemRepo {
    fn list_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        let interfaces: Vec<NetworkInterface> = datalink::interfaces();

        // getifaddrs always yields at least the loopback device, pnet swallows
        // its failure and hands back an empty list instead.
        if interfaces.is_empty() {
            return Err(LocalhostError::InterfaceEnumeration(String::from(
                "the OS reported no network interfaces",
            )));
        }

        Ok(interfaces)
    }

    fn addresses_of(&self, interface: &NetworkInterface) -> Result<Vec<IpNetwork>> {
        let current = find_addresses(datalink::interfaces(), interface)?;
        debug!(
            verbosity = 2,
            "{} carries {} address(es)",
            interface.name,
            current.len()
        );
        Ok(current)
    }
}

/// Looks `interface` up again in a fresh OS snapshot.
fn find_addresses(
    snapshot: Vec<NetworkInterface>,
    interface: &NetworkInterface,
) -> Result<Vec<IpNetwork>> {
    let query_failed = |reason: &str| LocalhostError::AddressQuery {
        interface: interface.name.clone(),
        reason: String::from(reason),
    };

    if snapshot.is_empty() {
        return Err(query_failed("the OS reported no network interfaces"));
    }

    snapshot
        .into_iter()
        .find(|candidate| candidate.index == interface.index && candidate.name == interface.name)
        .map(|current| current.ips)
        .ok_or_else(|| query_failed("interface is no longer present"))
}
