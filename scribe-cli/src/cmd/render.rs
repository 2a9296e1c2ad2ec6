use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;

use scribe_core::content::{self, ContentKind};
use scribe_core::{markdown, sessions};

use crate::config::load_config;

pub fn make_subcommand() -> Command {
    super::add_project_args(Command::new("render"))
        .about("Render one content fragment to stdout")
        .arg(
            Arg::new("fragment")
                .value_name("FRAGMENT")
                .help("Fragment to render")
                .value_parser(["discussions", "brainstorms", "sessions"])
                .required(true),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help("Emit HTML instead of Markdown")
                .action(ArgAction::SetTrue),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = load_config(args)?;
    let project = Path::new(&config.render.project);

    let content_config = config.site.content.clone().unwrap_or_default();
    let sessions_config = config.site.sessions.clone().unwrap_or_default();

    let fragment = args
        .get_one::<String>("fragment")
        .context("missing fragment argument")?;

    let output = match fragment.as_str() {
        "discussions" => content::render_list(project, ContentKind::Discussions, &content_config)?,
        "brainstorms" => content::render_list(project, ContentKind::Brainstorms, &content_config)?,
        "sessions" => sessions::render_calendar(project, &sessions_config)?,
        other => unreachable!("clap rejects unknown fragment {}", other),
    };

    if config.render.html {
        println!("{}", markdown::to_html(&output));
    } else {
        println!("{}", output);
    }

    Ok(())
}
