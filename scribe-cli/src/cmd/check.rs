use anyhow::{Result, bail};
use clap::{ArgMatches, Command};
use std::path::Path;

use scribe_core::content::{self, ContentKind};
use scribe_core::sessions;

use crate::config::load_config;

pub fn make_subcommand() -> Command {
    super::add_project_args(Command::new("check"))
        .about("Validate content files without rendering")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = load_config(args)?;
    let project = Path::new(&config.render.project);

    let content_config = config.site.content.clone().unwrap_or_default();
    let sessions_config = config.site.sessions.clone().unwrap_or_default();

    let mut failed = false;

    for kind in [ContentKind::Discussions, ContentKind::Brainstorms] {
        let name = kind.dir(&content_config);
        let dir = project.join(name);
        if !dir.exists() {
            println!("{}: no directory, skipped", name);
            continue;
        }

        match content::load_records(&dir) {
            Ok(records) => println!("{}: {} records ok", name, records.len()),
            Err(e) => {
                eprintln!("{}: {}", name, e);
                failed = true;
            }
        }
    }

    let session_dates = sessions::collect_sessions(project, &sessions_config)?;
    println!("sessions: {} dates", session_dates.len());

    if failed {
        bail!("content check failed");
    }

    println!("Content check passed");

    Ok(())
}
