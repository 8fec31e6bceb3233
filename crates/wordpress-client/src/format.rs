//! Rendering of a plain-text body into the HTML WordPress stores.

use wpbot_core::escape_html;

/// Wraps every blank-line separated block in `<p>`, turning single newlines into `<br>`.
pub fn to_paragraphs(body: &str) -> String {
    body.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            let lines: Vec<String> = block.lines().map(|l| escape_html(l.trim())).collect();
            format!("<p>{}</p>", lines.join("<br>"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
