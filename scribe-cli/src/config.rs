use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScribeConfig {
    /// Render settings
    pub render: RenderConfig,
    /// Site layout (from scribe-core)
    #[serde(flatten)]
    pub site: scribe_core::config::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Project root containing the content directories
    pub project: String,
    /// Emit HTML instead of Markdown
    pub html: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            project: ".".to_string(),
            html: false,
        }
    }
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            site: scribe_core::config::Config::default(),
        }
    }
}

impl ScribeConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (SCRIBE_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let project = args
            .get_one::<String>("project")
            .cloned()
            .unwrap_or_else(|| ".".to_string());
        let config_file = args
            .get_one::<String>("config")
            .cloned()
            .unwrap_or_else(|| format!("{}/{}", project, scribe_core::config::CONFIG_FILE));

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::with_name(&config_file.replace(".toml", "")));
        }

        // 3. Add environment variables with SCRIBE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("SCRIBE")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        // 4. Override with CLI arguments (highest priority)
        let mut cli_overrides = std::collections::HashMap::new();

        if let Some(project) = args.get_one::<String>("project") {
            cli_overrides.insert("render.project".to_string(), project.clone());
        }
        // Only set for commands that actually define the flag
        if args.try_get_one::<bool>("html").unwrap_or(None) == Some(&true) {
            cli_overrides.insert("render.html".to_string(), "true".to_string());
        }

        if !cli_overrides.is_empty() {
            builder = builder.add_source(config::Config::try_from(&cli_overrides)?);
        }

        // Build and deserialize
        let config = builder.build()?;
        let scribe_config: ScribeConfig = config.try_deserialize()?;

        Ok(scribe_config)
    }
}

pub fn load_config(args: &ArgMatches) -> Result<ScribeConfig> {
    ScribeConfig::load(args)
}
