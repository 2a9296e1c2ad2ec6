use clap::{Arg, Command};

pub mod check;
pub mod render;

pub fn add_project_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("DIR")
                .help("Project root containing the content directories"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file"),
        )
}
