mod cmd;
mod config;

use anyhow::Result;
use clap::Command;

fn main() -> Result<()> {
    let matches = Command::new("scribe")
        .about("Render documentation-site content fragments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::render::make_subcommand())
        .subcommand(cmd::check::make_subcommand())
        .get_matches();

    match matches.subcommand() {
        Some(("render", args)) => cmd::render::execute(args),
        Some(("check", args)) => cmd::check::execute(args),
        _ => unreachable!("subcommand is required"),
    }
}
