// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Error types shared by every layer of the local identity lookup.

use thiserror::Error;

/// Failures surfaced while resolving the host's intranet identity.
///
/// Malformed address strings are never an error: the classifier resolves
/// them to "not intranet". A hardware address that cannot be re-found is not
/// an error either, see `LocalhostService::mac_addr`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocalhostError {
    /// The OS refused to list its network interfaces.
    #[error("failed to enumerate network interfaces: {0}")]
    InterfaceEnumeration(String),

    /// The OS failed to report the addresses bound to a single interface.
    #[error("failed to query addresses of interface {interface}: {reason}")]
    AddressQuery { interface: String, reason: String },

    /// No usable interface carries an intranet IPv4 address.
    #[error("no local intranet ip found")]
    NoIntranetAddress,
}

pub type Result<T> = std::result::Result<T, LocalhostError>;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
