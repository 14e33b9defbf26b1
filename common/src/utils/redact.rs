// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Utilities for privacy-preserving output.

use pnet::util::MacAddr;

/// Redacts a MAC address to prevent hardware fingerprinting.
///
/// The vendor part (first three octets) is kept, the rest is masked.
///
/// # Examples
/// ```
/// use pnet::util::MacAddr;
/// use hostid_common::utils::redact;
///
/// let mac = MacAddr::new(0xa8, 0x5e, 0x45, 0xe0, 0xf0, 0x62);
/// assert_eq!(redact::mac_addr(&mac), "a8:5e:45:XX:XX:XX");
/// ```
pub fn mac_addr(mac: &MacAddr) -> String {
    format!("{:02x}:{:02x}:{:02x}:XX:XX:XX", mac.0, mac.1, mac.2)
}

/// Redacts a formatted hardware address string, keeping empty strings empty.
pub fn mac_str(mac: &str) -> String {
    if mac.is_empty() {
        return String::new();
    }
    match mac.parse::<MacAddr>() {
        Ok(parsed) => mac_addr(&parsed),
        Err(_) => String::from("XX:XX:XX:XX:XX:XX"),
    }
}
