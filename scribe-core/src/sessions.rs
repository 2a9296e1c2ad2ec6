use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::SessionsConfig;

// Log filenames: `w-2026-01-17.md` in the primary directory,
// `2026-01-17.md` in the secondary directory.
static PRIMARY_LOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z])-(\d{4}-\d{2}-\d{2})\.md$").expect("valid pattern"));
static SECONDARY_LOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})\.md$").expect("valid pattern"));

pub const NO_SESSIONS: &str = "*No sessions found.*";

/// Which agent logs exist for one date.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub variants: BTreeSet<String>,
    pub secondary: bool,
}

/// Aggregate session logs per date across both agent directories.
///
/// Missing directories contribute nothing; filenames that do not match the
/// log pattern (including `index.md`) are skipped.
pub fn collect_sessions(
    root: &Path,
    config: &SessionsConfig,
) -> std::io::Result<BTreeMap<String, SessionEntry>> {
    let docs = root.join(&config.dir);
    let mut sessions: BTreeMap<String, SessionEntry> = BTreeMap::new();

    let primary = docs.join(&config.primary);
    if primary.exists() {
        for entry in std::fs::read_dir(&primary)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name == "index.md" {
                continue;
            }
            if let Some(caps) = PRIMARY_LOG.captures(&name) {
                let variant = caps[1].to_uppercase();
                sessions
                    .entry(caps[2].to_string())
                    .or_default()
                    .variants
                    .insert(variant);
            }
        }
    }

    let secondary = docs.join(&config.secondary);
    if secondary.exists() {
        for entry in std::fs::read_dir(&secondary)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name == "index.md" {
                continue;
            }
            if let Some(caps) = SECONDARY_LOG.captures(&name) {
                sessions.entry(caps[1].to_string()).or_default().secondary = true;
            }
        }
    }

    Ok(sessions)
}

/// Render the session calendar card grid, newest date first.
///
/// Link paths are relative to the page the host splices the fragment into.
pub fn render_calendar(root: &Path, config: &SessionsConfig) -> std::io::Result<String> {
    let sessions = collect_sessions(root, config)?;

    if sessions.is_empty() {
        return Ok(NO_SESSIONS.to_string());
    }

    let secondary_label = config
        .secondary
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('S');

    let mut lines: Vec<String> = vec![r#"<div class="grid cards" markdown>"#.to_string()];

    for (date, entry) in sessions.iter().rev() {
        let mut links: Vec<String> = entry
            .variants
            .iter()
            .map(|v| format!("[{}]({}/{}-{}.md)", v, config.primary, v.to_lowercase(), date))
            .collect();
        if entry.secondary {
            links.push(format!(
                "[{}]({}/{}.md)",
                secondary_label, config.secondary, date
            ));
        }

        lines.push(format!(
            "\n-   **{}**\n\n    ---\n\n    {}\n",
            date,
            links.join(" ")
        ));
    }

    lines.push("</div>".to_string());

    Ok(lines.join("\n"))
}
