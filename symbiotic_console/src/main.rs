#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod client_main;
mod tui;

use std::io;

use clap::{arg, Command};
use symbiotic_chess::network;

fn main() -> io::Result<()> {
    // Stderr keeps log lines out of the alternate screen.
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Symbiotic Chess")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Console client for the symbiotic chess engine service")
        .arg(
            arg!([server_url] "Engine service URL")
                .default_value(network::DEFAULT_SERVER_URL),
        )
        .get_matches();

    client_main::run(client_main::ClientConfig {
        server_url: matches.get_one::<String>("server_url").unwrap().clone(),
    })
}
