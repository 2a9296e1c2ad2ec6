use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::{Function, Tera, Value};

use crate::config::{CONFIG_FILE, Config, ContentConfig, SessionsConfig};
use crate::content::{self, ContentKind};
use crate::sessions;

/// Renders one content section's fragment when called from a template.
pub struct ContentList {
    root: PathBuf,
    kind: ContentKind,
    config: ContentConfig,
}

impl ContentList {
    pub fn new(root: &Path, kind: ContentKind, config: ContentConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            kind,
            config,
        }
    }
}

impl Function for ContentList {
    fn call(&self, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        let fragment = content::render_list(&self.root, self.kind, &self.config)
            .map_err(|e| tera::Error::msg(e.to_string()))?;

        Ok(Value::String(fragment))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// Renders the session calendar fragment when called from a template.
pub struct SessionCalendar {
    root: PathBuf,
    config: SessionsConfig,
}

impl SessionCalendar {
    pub fn new(root: &Path, config: SessionsConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }
}

impl Function for SessionCalendar {
    fn call(&self, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        let fragment = sessions::render_calendar(&self.root, &self.config)
            .map_err(|e| tera::Error::msg(e.to_string()))?;

        Ok(Value::String(fragment))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// Register the fragment functions on a host template engine.
///
/// Templates can then call `discussions_list()`, `brainstorms_list()` and
/// `session_calendar()`. The project root is captured explicitly; nothing
/// is read from process-global state. The site layout is resolved from
/// `scribe.toml` once at registration, content is re-scanned on every call.
pub fn register_functions(tera: &mut Tera, root: &Path) {
    let config = Config::read(root.join(CONFIG_FILE)).unwrap_or_default();
    let content_config = config.content.unwrap_or_default();
    let sessions_config = config.sessions.unwrap_or_default();

    tera.register_function(
        "discussions_list",
        ContentList::new(root, ContentKind::Discussions, content_config.clone()),
    );
    tera.register_function(
        "brainstorms_list",
        ContentList::new(root, ContentKind::Brainstorms, content_config),
    );
    tera.register_function(
        "session_calendar",
        SessionCalendar::new(root, sessions_config),
    );
}
