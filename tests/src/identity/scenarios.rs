// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::net::Ipv4Addr;

use hostid_common::config::Config;
use hostid_common::error::LocalhostError;
use hostid_core::localhost::LocalhostService;
use pnet::util::MacAddr;

use crate::fixtures::{FakeHost, IFF_BROADCAST, IFF_UP, interface, loopback};

fn service(host: FakeHost) -> LocalhostService {
    LocalhostService::new(Box::new(host), Config::default())
}

fn office_nic() -> pnet::datalink::NetworkInterface {
    interface(
        "eth0",
        Some(MacAddr::new(0xa8, 0x5e, 0x45, 0xe0, 0xf0, 0x62)),
        &["192.168.12.73/24", "fe80::aa5e:45ff:fee0:f062/64"],
        IFF_UP | IFF_BROADCAST,
    )
}

#[test]
fn test_single_homed_host_identity() {
    let svc = service(FakeHost::new(vec![loopback(), office_nic()]));

    assert_eq!(svc.ip().unwrap(), Ipv4Addr::new(192, 168, 12, 73));
    assert_eq!(svc.ip().unwrap().to_string(), "192.168.12.73");
    assert_eq!(svc.mac_addr().unwrap(), "a8:5e:45:e0:f0:62");
}

#[test]
fn test_public_only_host_has_no_intranet_ip() {
    let wan = interface("eth0", None, &["8.8.8.8/24"], IFF_UP | IFF_BROADCAST);
    let svc = service(FakeHost::new(vec![loopback(), wan]));

    assert_eq!(svc.ip(), Err(LocalhostError::NoIntranetAddress));
    assert!(svc.intranet_interfaces().unwrap().is_empty());
}

#[test]
fn test_warden_bridge_is_never_selected() {
    let bridge = interface("w-19ab2c", None, &["10.254.0.1/30"], IFF_UP | IFF_BROADCAST);
    let wan = interface("eth0", None, &["203.0.113.4/24"], IFF_UP | IFF_BROADCAST);
    let svc = service(FakeHost::new(vec![bridge, wan]));

    assert_eq!(svc.ip(), Err(LocalhostError::NoIntranetAddress));
}

#[test]
fn test_down_interface_is_never_selected() {
    let down = interface("eth1", None, &["10.0.0.3/8"], IFF_BROADCAST);
    let svc = service(FakeHost::new(vec![down, office_nic()]));

    assert_eq!(svc.ip().unwrap(), Ipv4Addr::new(192, 168, 12, 73));
}

#[test]
fn test_first_reported_interface_wins() {
    let wlan = interface(
        "wlan0",
        Some(MacAddr::new(0x02, 0, 0, 0, 0, 0x01)),
        &["172.20.1.5/16"],
        IFF_UP | IFF_BROADCAST,
    );
    let svc = service(FakeHost::new(vec![wlan, office_nic()]));

    assert_eq!(svc.ip().unwrap(), Ipv4Addr::new(172, 20, 1, 5));
    assert_eq!(svc.mac_addr().unwrap(), "02:00:00:00:00:01");
}

#[test]
fn test_mac_addr_is_empty_after_renumbering() {
    let mut renumbered = office_nic();
    renumbered.ips = vec!["192.168.12.80/24".parse().unwrap()];
    let svc = service(FakeHost::changing(vec![vec![office_nic()], vec![renumbered]]));

    assert_eq!(svc.mac_addr(), Ok(String::new()));
}

#[test]
fn test_enumeration_failure_propagates() {
    let svc = service(FakeHost::unreachable());

    assert!(matches!(svc.ip(), Err(LocalhostError::InterfaceEnumeration(_))));
    assert!(matches!(svc.mac_addr(), Err(LocalhostError::InterfaceEnumeration(_))));
    assert!(matches!(
        svc.intranet_interfaces(),
        Err(LocalhostError::InterfaceEnumeration(_))
    ));
}

#[test]
fn test_identity_reports_carrier() {
    let svc = service(FakeHost::new(vec![loopback(), office_nic()]));
    let identity = svc.identity().unwrap();

    assert_eq!(identity.interface.as_deref(), Some("eth0"));
    assert_eq!(identity.mac, "a8:5e:45:e0:f0:62");
}

#[test]
fn test_classifier_is_reexported() {
    assert!(hostid_core::is_intranet("10.255.255.255"));
    assert!(!hostid_core::is_intranet("172.32.0.1"));
}

// Runs against the real host, so only invariants can be asserted.
#[test]
fn test_live_host_invariants() {
    match hostid_core::intranet_interfaces() {
        Ok(interfaces) => {
            for iface in interfaces {
                assert!(iface.is_up());
                assert!(!iface.is_loopback());
                assert!(!iface.name.starts_with("w-"));
            }
        }
        Err(e) => eprintln!("WARNING: could not list interfaces ({e})"),
    }

    match hostid_core::ip() {
        Ok(ip) => {
            assert!(!ip.is_loopback());
            assert_eq!(hostid_core::ip().ok(), Some(ip));

            let mac = hostid_core::mac_addr().unwrap();
            assert!(mac.is_empty() || mac.len() == 17);
            assert_eq!(mac, mac.to_lowercase());
        }
        Err(LocalhostError::NoIntranetAddress) => {
            eprintln!("WARNING: no intranet address on this host");
        }
        Err(e) => eprintln!("WARNING: ip lookup failed ({e})"),
    }
}

#[test]
fn test_vpn_tunnel_without_link_layer_address() {
    let tun = interface("tun0", Some(MacAddr::zero()), &["10.8.0.2/24"], IFF_UP);
    let svc = service(FakeHost::new(vec![loopback(), tun]));

    assert_eq!(svc.ip().unwrap(), Ipv4Addr::new(10, 8, 0, 2));
    assert_eq!(svc.mac_addr(), Ok(String::new()));
}
