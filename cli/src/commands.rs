// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The *definition* of every argument and flag lives here; each command's
//! execution lives in its own submodule. `From<&CommandLine> for Config`
//! keeps the library crates unaware of the CLI layer.

pub mod check;
pub mod interfaces;
pub mod ip;
pub mod mac;
pub mod show;

use clap::{ArgAction, Parser, Subcommand};
use hostid_common::config::Config;
use hostid_core::localhost::LocalhostService;
use hostid_core::system::SystemRepo;

#[derive(Parser)]
#[command(name = "hostid")]
#[command(about = "Report this host's intranet IPv4 and hardware address.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Ignore interfaces whose name starts with PREFIX (in addition to "w-")
    #[arg(short = 'x', long = "exclude", value_name = "PREFIX", global = true)]
    pub exclude: Vec<String>,

    /// Print machine readable JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Redact hardware addresses (keeps the vendor octets)
    #[arg(long = "redact", global = true)]
    pub redact: bool,

    /// Increase logging detail (-v: debug logs, -vv: per-interface details)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the primary intranet IPv4 address
    Ip,

    /// Print the hardware address of the interface carrying that address
    Mac,

    /// List interfaces carrying intranet addresses
    #[command(alias = "i")]
    Interfaces,

    /// Classify addresses as intranet or public
    #[command(alias = "c")]
    Check {
        #[arg(value_name = "ADDRESSES", num_args(1..), required = true)]
        addresses: Vec<String>,
    },

    /// Show the full local identity
    #[command(alias = "s")]
    Show,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        let mut cfg = Config::default();
        cfg.excluded_prefixes.extend(cmd.exclude.iter().cloned());
        cfg.redact = cmd.redact;
        cfg.json = cmd.json;
        cfg
    }
}

pub(crate) fn service(cfg: &Config) -> LocalhostService {
    LocalhostService::new(Box::new(SystemRepo), cfg.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn exclusions_extend_the_default() {
        let cmd = CommandLine::parse_from(["hostid", "-x", "docker", "--exclude", "veth", "ip"]);
        let cfg = Config::from(&cmd);
        assert_eq!(cfg.excluded_prefixes, vec!["w-", "docker", "veth"]);
        assert!(!cfg.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cmd = CommandLine::parse_from(["hostid", "check", "10.0.0.1", "8.8.8.8", "--json"]);
        let cfg = Config::from(&cmd);
        assert!(cfg.json);
        match cmd.command {
            Commands::Check { addresses } => assert_eq!(addresses, vec!["10.0.0.1", "8.8.8.8"]),
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn check_requires_an_address() {
        assert!(CommandLine::try_parse_from(["hostid", "check"]).is_err());
    }
}
