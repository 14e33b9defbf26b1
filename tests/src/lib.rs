// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod identity;

/// In-memory stand-ins for the OS network configuration.
pub mod fixtures {
    use std::cell::Cell;

    use hostid_common::error::{LocalhostError, Result};
    use hostid_common::system::InterfaceRepository;
    use pnet::datalink::NetworkInterface;
    use pnet::ipnetwork::IpNetwork;
    use pnet::util::MacAddr;

    pub const IFF_UP: u32 = 1;
    pub const IFF_BROADCAST: u32 = 1 << 1;
    pub const IFF_LOOPBACK: u32 = 1 << 3;

    /// A host whose network state can change between `list_interfaces` calls.
    pub struct FakeHost {
        states: Vec<Vec<NetworkInterface>>,
        listed: Cell<usize>,
        enumeration_fails: bool,
    }

    impl FakeHost {
        pub fn new(interfaces: Vec<NetworkInterface>) -> Self {
            Self::changing(vec![interfaces])
        }

        /// Each listing serves the next state; the last one sticks.
        pub fn changing(states: Vec<Vec<NetworkInterface>>) -> Self {
            Self {
                states,
                listed: Cell::new(0),
                enumeration_fails: false,
            }
        }

        pub fn unreachable() -> Self {
            Self {
                states: vec![Vec::new()],
                listed: Cell::new(0),
                enumeration_fails: true,
            }
        }
    }

    impl InterfaceRepository for FakeHost {
        fn list_interfaces(&self) -> Result<Vec<NetworkInterface>> {
            if self.enumeration_fails {
                return Err(LocalhostError::InterfaceEnumeration(
                    "getifaddrs: permission denied".to_string(),
                ));
            }
            let n = self.listed.get();
            self.listed.set(n + 1);
            Ok(self.states[n.min(self.states.len() - 1)].clone())
        }

        fn addresses_of(&self, interface: &NetworkInterface) -> Result<Vec<IpNetwork>> {
            Ok(interface.ips.clone())
        }
    }

    pub fn interface(name: &str, mac: Option<MacAddr>, ips: &[&str], flags: u32) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: String::new(),
            index: 0,
            mac,
            ips: ips.iter().map(|ip| ip.parse().unwrap()).collect(),
            flags,
        }
    }

    pub fn loopback() -> NetworkInterface {
        interface("lo", None, &["127.0.0.1/8", "::1/128"], IFF_UP | IFF_LOOPBACK)
    }
}
