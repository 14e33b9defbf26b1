// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! **Medium Access Control (MAC)** address helpers.
//!
//! Hardware addresses are rendered as lowercase, colon separated hex octets.
//! The **Organizationally unique identifier (OUI)** database is only used to
//! decorate output with a vendor name.

use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::util::MacAddr;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Formats a hardware address, or returns an empty string when there is none.
///
/// An all-zero address is how the OS reports "no link-layer address" (tun
/// devices, loopback), so it formats as empty too.
pub fn format_mac(mac: Option<MacAddr>) -> String {
    match mac.filter(|mac| *mac != MacAddr::zero()) {
        Some(mac) => format!(
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            mac.0, mac.1, mac.2, mac.3, mac.4, mac.5
        ),
        None => String::new(),
    }
}

fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB.get_or_init(|| Oui::default().ok()).as_ref()
}

/// Identify the vendor of a MAC address.
pub fn get_vendor(mac: MacAddr) -> Option<String> {
    let db = get_oui_db()?;
    match db.lookup_by_mac(&format_mac(Some(mac))) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
    }
}

/// Vendor of an already formatted hardware address, if it parses and is known.
pub fn vendor_of(mac: &str) -> Option<String> {
    mac.parse::<MacAddr>().ok().and_then(get_vendor)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
