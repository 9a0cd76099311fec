//! Markup fragments and CSS value formulas shared by the mode templates.

use std::fmt::Write;

use tabkit_model::{Configuration, TabEntry};

use crate::video::embed_url;

/// Permissions granted to embedded players.
const IFRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Page background behind the widget.
pub(crate) const PAGE_BACKGROUND: &str = "#f0f0f0";

/// Write the document prologue up to and including the opening `<style>`.
pub(crate) fn open_document(out: &mut String, title: &str) {
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(out, "    <title>{title}</title>");
    out.push_str("    <style>\n");
}

/// Close the stylesheet and head, open the body.
pub(crate) fn open_body(out: &mut String) {
    out.push_str("    </style>\n</head>\n<body>\n");
}

/// Close body and document.
pub(crate) fn close_document(out: &mut String) {
    out.push_str("</body>\n</html>\n");
}

/// `body` rule common to every mode, plus `extra` declarations.
pub(crate) fn body_rule(out: &mut String, config: &Configuration, extra: &str) {
    let _ = write!(
        out,
        "        body {{
            font-family: {font};
            margin: 0;
            padding: {padding};
            background-color: {PAGE_BACKGROUND};
{extra}        }}
",
        font = config.font_family.css_stack(),
        padding = if config.full_page_layout { "0" } else { "20px" },
    );
}

/// CSS for the responsive 16:9 video frame.
pub(crate) fn video_frame_rules(out: &mut String, margin_top: Option<u32>) {
    out.push_str(
        "        .iframe-container {
            width: 100%;
            overflow: hidden;
            padding-top: 56.25%;
            position: relative;
",
    );
    if let Some(margin) = margin_top {
        let _ = writeln!(out, "            margin-top: {margin}px;");
    }
    out.push_str(
        "        }
        .iframe-container iframe {
            border: 0;
            height: 100%;
            left: 0;
            position: absolute;
            top: 0;
            width: 100%;
        }
",
    );
}

/// Drop shadow for `intensity`: blur is twice the offset, alpha a tenth.
pub(crate) fn box_shadow(intensity: u32) -> String {
    format!(
        "0 {intensity}px {blur}px rgba(0, 0, 0, {alpha})",
        blur = intensity * 2,
        alpha = f64::from(intensity) * 0.1,
    )
}

/// Font size for slide, card and section headers.
pub(crate) fn enlarged_font_size(font_size: u32) -> f64 {
    f64::from(font_size) * 1.5
}

/// Content pane height, `auto` when auto height is on.
pub(crate) fn content_height(config: &Configuration) -> String {
    if config.auto_height {
        "auto".to_owned()
    } else {
        format!("{}px", config.metrics.content_height)
    }
}

/// Wrap each line of `content` in its own paragraph.
///
/// Lines are written as-is, so inline markup in tab content renders.
/// Empty lines produce empty paragraphs.
pub(crate) fn paragraphs(out: &mut String, content: &str) {
    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let _ = write!(out, "<p>{line}</p>");
    }
}

/// Embedded player for `tab`, or nothing when the link is absent or
/// unrecognized.
pub(crate) fn video_frame(out: &mut String, tab: &TabEntry, indent: &str) {
    if !tab.has_video_link() {
        return;
    }
    let Some(src) = embed_url(&tab.video_link) else {
        return;
    };
    let _ = write!(
        out,
        "{indent}<div class=\"iframe-container\">
{indent}    <iframe
{indent}        loading=\"lazy\"
{indent}        src=\"{src}\"
{indent}        title=\"YouTube video player\"
{indent}        frameborder=\"0\"
{indent}        allow=\"{IFRAME_ALLOW}\"
{indent}        allowfullscreen
{indent}    ></iframe>
{indent}</div>
"
    );
}

/// `checked` attribute for the first radio of a group.
pub(crate) fn checked_if_first(index: usize) -> &'static str {
    if index == 0 { " checked" } else { "" }
}

/// Escape a value for a single-quoted JavaScript string literal.
pub(crate) fn escape_js(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\'' => result.push_str("\\'"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\u{2028}' => result.push_str("\\u2028"),
            '\u{2029}' => result.push_str("\\u2029"),
            '<' => result.push_str("\\x3c"),
            _ => result.push(c),
        }
    }
    result
}
