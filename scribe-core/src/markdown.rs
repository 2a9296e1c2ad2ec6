use pulldown_cmark::{Options, Parser, html};

/// Convert a Markdown fragment to HTML.
///
/// Fragments are spliced into pages as Markdown by default; hosts that want
/// finished HTML run them through here instead.
pub fn to_html(markdown: &str) -> String {
    let options = Options::all();
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);

    out
}
