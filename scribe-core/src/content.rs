use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::ContentConfig;

#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Malformed(PathBuf, serde_json::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "IO error: {}", e),
            ContentError::Malformed(p, e) => {
                write!(f, "Malformed content file {}: {}", p.display(), e)
            }
        }
    }
}

impl std::error::Error for ContentError {}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::Io(err)
    }
}

/// The two content sections a project can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Discussions,
    Brainstorms,
}

impl ContentKind {
    pub fn dir<'a>(&self, config: &'a ContentConfig) -> &'a str {
        match self {
            ContentKind::Discussions => &config.discussions,
            ContentKind::Brainstorms => &config.brainstorms,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContentKind::Discussions => "*No discussions found.*",
            ContentKind::Brainstorms => "*No brainstorms found.*",
        }
    }
}

/// One record parsed from a JSON content file. The `id` comes from the
/// filename stem, never from the file body.
#[derive(Debug, Deserialize)]
pub struct ContentRecord {
    #[serde(skip)]
    pub id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub gist: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: Option<String>,
}

impl ContentRecord {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    fn title_link(&self, kind: ContentKind) -> Option<&str> {
        match kind {
            ContentKind::Discussions => self.url.as_deref(),
            // Brainstorms live in gists first, discussions second
            ContentKind::Brainstorms => self.gist.as_deref().or(self.url.as_deref()),
        }
    }

    fn date_key(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}

/// Load and sort every record in a content directory, newest first.
pub fn load_records(dir: &Path) -> Result<Vec<ContentRecord>, ContentError> {
    let mut records = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !path.extension().map(|ext| ext == "json").unwrap_or(false) {
            continue;
        }

        let data = std::fs::read_to_string(&path)?;
        let mut record: ContentRecord =
            serde_json::from_str(&data).map_err(|e| ContentError::Malformed(path.clone(), e))?;
        record.id = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        records.push(record);
    }

    // ISO dates sort chronologically as strings. Ties break on the
    // filename-derived id so output never depends on directory
    // enumeration order.
    records.sort_by(|a, b| b.date_key().cmp(a.date_key()).then_with(|| a.id.cmp(&b.id)));

    Ok(records)
}

/// Render the Markdown fragment for one content section.
pub fn render_list(
    root: &Path,
    kind: ContentKind,
    config: &ContentConfig,
) -> Result<String, ContentError> {
    let dir = root.join(kind.dir(config));

    if !dir.exists() {
        return Ok(kind.placeholder().to_string());
    }

    let records = load_records(&dir)?;
    if records.is_empty() {
        return Ok(kind.placeholder().to_string());
    }

    let mut lines: Vec<String> = Vec::new();
    for record in &records {
        render_record(&mut lines, record, kind);
    }

    Ok(lines.join("\n"))
}

fn render_record(lines: &mut Vec<String>, record: &ContentRecord, kind: ContentKind) {
    let title = record.display_title();
    match record.title_link(kind) {
        Some(link) => lines.push(format!("### [{}]({})", title, link)),
        None => lines.push(format!("### {}", title)),
    }

    let tag_str = record
        .tags
        .iter()
        .map(|t| format!("`{}`", t))
        .collect::<Vec<_>>()
        .join(" ");
    match &record.date {
        Some(date) if tag_str.is_empty() => lines.push(format!("*{}*", date)),
        Some(date) => lines.push(format!("*{}* {}", date, tag_str)),
        None if !tag_str.is_empty() => lines.push(tag_str),
        None => {}
    }
    lines.push(String::new());

    if let Some(summary) = record.summary.as_deref().filter(|s| !s.is_empty()) {
        lines.push(summary.to_string());
        lines.push(String::new());
    }

    if kind == ContentKind::Brainstorms {
        let mut refs = Vec::new();
        if let Some(gist) = &record.gist {
            refs.push(format!("[Gist]({})", gist));
        }
        if let Some(url) = &record.url {
            refs.push(format!("[Discussion]({})", url));
        }
        if !refs.is_empty() {
            lines.push(refs.join(" | "));
            lines.push(String::new());
        }
    }

    lines.push("---".to_string());
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project_with(section: &str) -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(section);
        fs::create_dir_all(&dir).unwrap();
        (tmp, dir)
    }

    fn render(root: &Path, kind: ContentKind) -> String {
        render_list(root, kind, &ContentConfig::default()).unwrap()
    }

    #[test]
    fn test_missing_directory_yields_placeholder() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            render(tmp.path(), ContentKind::Discussions),
            "*No discussions found.*"
        );
    }

    #[test]
    fn test_empty_directory_yields_placeholder() {
        let (tmp, _dir) = project_with("brainstorms");
        assert_eq!(
            render(tmp.path(), ContentKind::Brainstorms),
            "*No brainstorms found.*"
        );
    }

    #[test]
    fn test_record_fields_appear_verbatim() {
        let (tmp, dir) = project_with("discussions");
        fs::write(
            dir.join("retry.json"),
            r#"{
                "title": "Retry budget",
                "url": "https://example.com/d/12",
                "summary": "How many times to retry before giving up.",
                "tags": ["net", "retry"],
                "date": "2026-03-04"
            }"#,
        )
        .unwrap();

        let out = render(tmp.path(), ContentKind::Discussions);
        assert!(out.contains("### [Retry budget](https://example.com/d/12)"));
        assert!(out.contains("*2026-03-04* `net` `retry`"));
        assert!(out.contains("How many times to retry before giving up."));
        assert!(out.contains("---"));
    }

    #[test]
    fn test_records_sort_newest_first_with_dateless_last() {
        let (tmp, dir) = project_with("discussions");
        fs::write(
            dir.join("older.json"),
            r#"{"title": "Older", "date": "2026-01-10"}"#,
        )
        .unwrap();
        fs::write(
            dir.join("newer.json"),
            r#"{"title": "Newer", "date": "2026-02-01"}"#,
        )
        .unwrap();
        fs::write(dir.join("undated.json"), r#"{"title": "Undated"}"#).unwrap();

        let out = render(tmp.path(), ContentKind::Discussions);
        let newer = out.find("### Newer").unwrap();
        let older = out.find("### Older").unwrap();
        let undated = out.find("### Undated").unwrap();
        assert!(newer < older);
        assert!(older < undated);
    }

    #[test]
    fn test_equal_dates_break_ties_by_id() {
        let (tmp, dir) = project_with("discussions");
        fs::write(
            dir.join("zebra.json"),
            r#"{"title": "Zebra", "date": "2026-01-10"}"#,
        )
        .unwrap();
        fs::write(
            dir.join("apple.json"),
            r#"{"title": "Apple", "date": "2026-01-10"}"#,
        )
        .unwrap();

        let out = render(tmp.path(), ContentKind::Discussions);
        assert!(out.find("### Apple").unwrap() < out.find("### Zebra").unwrap());
    }

    #[test]
    fn test_title_falls_back_to_filename_stem() {
        let (tmp, dir) = project_with("discussions");
        fs::write(dir.join("bare-notes.json"), "{}").unwrap();

        let out = render(tmp.path(), ContentKind::Discussions);
        assert!(out.contains("### bare-notes"));
    }

    #[test]
    fn test_record_without_link_gets_plain_heading() {
        let (tmp, dir) = project_with("discussions");
        fs::write(
            dir.join("local.json"),
            r#"{"title": "Local only", "date": "2026-01-01"}"#,
        )
        .unwrap();

        let out = render(tmp.path(), ContentKind::Discussions);
        assert!(out.contains("### Local only"));
        assert!(!out.contains("### ["));
    }

    #[test]
    fn test_brainstorms_prefer_gist_and_render_reference_row() {
        let (tmp, dir) = project_with("brainstorms");
        fs::write(
            dir.join("sketch.json"),
            r#"{
                "title": "Sketch",
                "gist": "https://example.com/g/9",
                "url": "https://example.com/d/9",
                "date": "2026-02-14"
            }"#,
        )
        .unwrap();

        let out = render(tmp.path(), ContentKind::Brainstorms);
        assert!(out.contains("### [Sketch](https://example.com/g/9)"));
        assert!(
            out.contains("[Gist](https://example.com/g/9) | [Discussion](https://example.com/d/9)")
        );
    }

    #[test]
    fn test_brainstorms_fall_back_to_url_link() {
        let (tmp, dir) = project_with("brainstorms");
        fs::write(
            dir.join("thread.json"),
            r#"{"title": "Thread", "url": "https://example.com/d/3"}"#,
        )
        .unwrap();

        let out = render(tmp.path(), ContentKind::Brainstorms);
        assert!(out.contains("### [Thread](https://example.com/d/3)"));
        assert!(out.contains("[Discussion](https://example.com/d/3)"));
        assert!(!out.contains("[Gist]"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let (tmp, dir) = project_with("discussions");
        fs::write(dir.join("broken.json"), "{ not json").unwrap();

        match render_list(tmp.path(), ContentKind::Discussions, &ContentConfig::default()) {
            Err(ContentError::Malformed(path, _)) => {
                assert!(path.ends_with("broken.json"));
            }
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_files_are_skipped() {
        let (tmp, dir) = project_with("discussions");
        fs::write(dir.join("notes.md"), "# scratch").unwrap();

        assert_eq!(
            render(tmp.path(), ContentKind::Discussions),
            "*No discussions found.*"
        );
    }

    #[test]
    fn test_repeated_renders_are_identical() {
        let (tmp, dir) = project_with("discussions");
        fs::write(
            dir.join("a.json"),
            r#"{"title": "A", "date": "2026-01-01", "tags": ["x"]}"#,
        )
        .unwrap();
        fs::write(
            dir.join("b.json"),
            r#"{"title": "B", "date": "2026-01-02"}"#,
        )
        .unwrap();

        let first = render(tmp.path(), ContentKind::Discussions);
        let second = render(tmp.path(), ContentKind::Discussions);
        assert_eq!(first, second);
    }
}
