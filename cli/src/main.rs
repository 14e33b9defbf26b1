// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # hostid CLI Entry Point
//!
//! Parses arguments, installs the `tracing` subscriber, maps flags onto the
//! library `Config` and dispatches to `commands/`. Errors propagated by a
//! command are logged here and turned into a non-zero `ExitCode`.

mod commands;
mod terminal;

use std::process::ExitCode;

use hostid_common::{config::Config, error};

use crate::commands::{CommandLine, Commands, check, interfaces, ip, mac, show};
use crate::terminal::logging;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbosity);

    let cfg = Config::from(&commands);

    let result = match &commands.command {
        Commands::Ip => ip::ip(&cfg),
        Commands::Mac => mac::mac(&cfg),
        Commands::Interfaces => interfaces::interfaces(&cfg),
        Commands::Check { addresses } => check::check(addresses, &cfg),
        Commands::Show => show::show(&cfg),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e}");
            ExitCode::FAILURE
        }
    }
}
