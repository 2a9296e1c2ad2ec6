pub mod config;
pub mod content;
pub mod functions;
pub mod markdown;
pub mod sessions;

// Re-export main types
pub use config::{Config, ConfigError};
pub use content::{ContentError, ContentKind, ContentRecord};
pub use functions::register_functions;
pub use sessions::SessionEntry;

use std::path::Path;

use config::CONFIG_FILE;

/// Render the discussions list fragment for a project.
pub fn discussions_list(root: &Path) -> Result<String, ContentError> {
    let config = Config::read(root.join(CONFIG_FILE)).unwrap_or_default();
    content::render_list(
        root,
        ContentKind::Discussions,
        &config.content.unwrap_or_default(),
    )
}

/// Render the brainstorms list fragment for a project.
pub fn brainstorms_list(root: &Path) -> Result<String, ContentError> {
    let config = Config::read(root.join(CONFIG_FILE)).unwrap_or_default();
    content::render_list(
        root,
        ContentKind::Brainstorms,
        &config.content.unwrap_or_default(),
    )
}

/// Render the session calendar fragment for a project.
pub fn session_calendar(root: &Path) -> std::io::Result<String> {
    let config = Config::read(root.join(CONFIG_FILE)).unwrap_or_default();
    sessions::render_calendar(root, &config.sessions.unwrap_or_default())
}
