// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use crate::error::Result;

/// Defines the contract for reading OS-level network configuration.
///
/// The selection logic only ever talks to this trait, so synthetic interface
/// sets can stand in for the real host in tests.
pub trait InterfaceRepository {
    /// Returns every interface the OS knows about, unfiltered, in OS order.
    fn list_interfaces(&self) -> Result<Vec<NetworkInterface>>;

    /// Returns the addresses currently bound to `interface`, in OS order.
    fn addresses_of(&self, interface: &NetworkInterface) -> Result<Vec<IpNetwork>>;
}
