//! Ratoracle CLI: the `ratoracle` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::setup_logging();
    let config = support::load_config_or_exit(cli.config.as_deref());

    match cli.command {
        Commands::Arith {
            op,
            a_low,
            a_high,
            b_low,
            b_high,
            json,
        } => commands::arith::run(
            &config,
            commands::arith::Args {
                op,
                a: (a_low, a_high),
                b: (b_low, b_high),
                json,
            },
        ),

        Commands::Query {
            low,
            high,
            target_low,
            target_high,
            delta,
            json,
        } => commands::query::run(low, high, target_low, target_high, delta, json),

        Commands::Bisect {
            low,
            high,
            precision,
            json,
        } => commands::narrow::run(&config, low, high, precision, None, json),

        Commands::Narrow {
            low,
            high,
            precision,
            weight,
            json,
        } => commands::narrow::run(&config, low, high, precision, Some(weight), json),
    }
}
