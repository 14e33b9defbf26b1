// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Interface Selection
//!
//! Narrows the OS interface list down to the interfaces that can carry the
//! host's intranet identity, and extracts their IPv4 addresses.
//!
//! Results keep the order reported by the OS. Nothing is sorted, so on
//! multi-homed hosts "first" simply means "first the OS reported".

use std::net::{IpAddr, Ipv4Addr};

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use crate::config::Config;
use crate::debug;
use crate::error::Result;
use crate::system::InterfaceRepository;
use crate::utils::ip::is_intranet;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Exclusion {
    /// The interface is administratively down.
    IsDown,
    /// The interface is a loopback device.
    IsLoopback,
    /// The interface name matches an excluded prefix (e.g. a `w-` bridge).
    ExcludedName,
}

/// Lists the interfaces that are up, not loopback and not excluded by name.
pub fn available_interfaces<R>(repo: &R, cfg: &Config) -> Result<Vec<NetworkInterface>>
where
    R: InterfaceRepository + ?Sized,
{
    let interfaces: Vec<NetworkInterface> = repo.list_interfaces()?;

    debug!(
        verbosity = 1,
        "OS reported {} network interface(s)",
        interfaces.len()
    );

    let available = interfaces
        .into_iter()
        .filter(|interface| match check_usable(interface, cfg) {
            Ok(()) => true,
            Err(reason) => {
                debug!(verbosity = 2, "Skipping {}: {:?}", interface.name, reason);
                false
            }
        })
        .collect();

    Ok(available)
}

/// Returns the IPv4 addresses bound to `interface`, loopback excluded.
///
/// IPv6 bindings are dropped silently, except IPv4-mapped ones which are
/// reduced to their 4-byte form. A failing OS query is propagated.
pub fn intranet_ips<R>(repo: &R, interface: &NetworkInterface) -> Result<Vec<Ipv4Addr>>
where
    R: InterfaceRepository + ?Sized,
{
    let addresses: Vec<IpNetwork> = repo.addresses_of(interface)?;

    Ok(addresses
        .iter()
        .filter_map(to_ipv4)
        .filter(|ip| !ip.is_loopback())
        .collect())
}

/// Keeps the available interfaces that carry at least one intranet address.
///
/// An interface is pushed once per qualifying address, so multi-addressed
/// interfaces may appear more than once. The first failing address query
/// aborts the whole call.
pub fn intranet_interfaces<R>(repo: &R, cfg: &Config) -> Result<Vec<NetworkInterface>>
where
    R: InterfaceRepository + ?Sized,
{
    let mut selected: Vec<NetworkInterface> = Vec::new();

    for interface in available_interfaces(repo, cfg)? {
        for ip in intranet_ips(repo, &interface)? {
            if is_intranet(&ip.to_string()) {
                selected.push(interface.clone());
            }
        }
    }

    Ok(selected)
}

fn check_usable(interface: &NetworkInterface, cfg: &Config) -> std::result::Result<(), Exclusion> {
    if !interface.is_up() {
        return Err(Exclusion::IsDown);
    }
    if interface.is_loopback() {
        return Err(Exclusion::IsLoopback);
    }
    if cfg.is_excluded(&interface.name) {
        return Err(Exclusion::ExcludedName);
    }
    Ok(())
}

fn to_ipv4(network: &IpNetwork) -> Option<Ipv4Addr> {
    match network.ip() {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
