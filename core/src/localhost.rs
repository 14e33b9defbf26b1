// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Local Identity Service
//!
//! Composes interface selection and address extraction into the host's
//! intranet identity: its primary IPv4 address and the hardware address of
//! the interface carrying it.
//!
//! Error tolerance differs per operation:
//! * [`LocalhostService::intranet_interfaces`] aborts on the first failing
//!   per-interface address query.
//! * [`LocalhostService::ip`] skips interfaces whose addresses cannot be read.
//! * [`LocalhostService::mac_addr`] aborts again, but treats "no interface
//!   carries the ip anymore" as success with an empty string.

use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;

use hostid_common::config::Config;
use hostid_common::error::{LocalhostError, Result};
use hostid_common::interface;
use hostid_common::models::localhost::{InterfaceSummary, LocalIdentity};
use hostid_common::system::InterfaceRepository;
use hostid_common::utils::mac::format_mac;
use hostid_common::{debug, info, success, warn};

use crate::system::SystemRepo;

pub struct LocalhostService {
    repo: Box<dyn InterfaceRepository>,
    cfg: Config,
}

impl LocalhostService {
    pub fn new(repo: Box<dyn InterfaceRepository>, cfg: Config) -> Self {
        Self { repo, cfg }
    }

    /// A service reading the real host with default settings.
    pub fn system() -> Self {
        Self::new(Box::new(SystemRepo), Config::default())
    }

    /// Usable interfaces carrying at least one intranet address.
    pub fn intranet_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        interface::intranet_interfaces(self.repo.as_ref(), &self.cfg)
    }

    /// Returns the first IPv4 address found on any intranet interface.
    pub fn ip(&self) -> Result<Ipv4Addr> {
        let mut ips: Vec<Ipv4Addr> = Vec::new();

        for iface in self.intranet_interfaces()? {
            match interface::intranet_ips(self.repo.as_ref(), &iface) {
                Ok(found) => ips.extend(found),
                Err(e) => debug!(verbosity = 1, "Ignoring {}: {e}", iface.name),
            }
        }

        let ip = ips.first().copied().ok_or(LocalhostError::NoIntranetAddress)?;
        info!(verbosity = 1, "Primary intranet address is {ip}");
        Ok(ip)
    }

    /// Returns the hardware address of the interface carrying [`Self::ip`].
    ///
    /// An empty string means the interface could not be re-found, e.g.
    /// because the network changed between the two lookups, or that it has
    /// no link-layer address. This is not an error; no real hardware address
    /// is ever empty.
    pub fn mac_addr(&self) -> Result<String> {
        let (_, carrier) = self.locate()?;
        Ok(carrier.map(|iface| format_mac(iface.mac)).unwrap_or_default())
    }

    /// Resolves ip, hardware address and carrying interface in one go.
    pub fn identity(&self) -> Result<LocalIdentity> {
        let (ip, carrier) = self.locate()?;
        let mac = carrier.as_ref().map(|iface| format_mac(iface.mac)).unwrap_or_default();
        let identity = LocalIdentity::new(ip, mac, carrier.map(|iface| iface.name));
        success!(
            "Resolved {} ({}) on {}",
            identity.ip,
            identity.range,
            identity.interface.as_deref().unwrap_or("an unknown interface")
        );
        Ok(identity)
    }

    /// Intranet interfaces with their IPv4 addresses, one entry per interface.
    pub fn interface_summaries(&self) -> Result<Vec<InterfaceSummary>> {
        let mut interfaces = self.intranet_interfaces()?;
        interfaces.dedup_by(|a, b| a.index == b.index && a.name == b.name);

        interfaces
            .iter()
            .map(|iface| {
                let ips = interface::intranet_ips(self.repo.as_ref(), iface)?;
                Ok(InterfaceSummary::new(iface, ips))
            })
            .collect()
    }

    fn locate(&self) -> Result<(Ipv4Addr, Option<NetworkInterface>)> {
        let local_ip = self.ip()?;

        for iface in self.intranet_interfaces()? {
            let ips = interface::intranet_ips(self.repo.as_ref(), &iface)?;
            if ips.contains(&local_ip) {
                return Ok((local_ip, Some(iface)));
            }
        }

        warn!("No interface carries {local_ip} anymore, hardware address unknown");
        Ok((local_ip, None))
    }
}

impl Default for LocalhostService {
    fn default() -> Self {
        Self::system()
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
