//! Mode-specific document templates.
//!
//! Each presentation mode implements [`ModeTemplate`]. A template writes its
//! own stylesheet, body and optional script; nothing is shared between
//! templates beyond the formulas in [`crate::markup`].

mod accordion;
mod flipcard;
mod slider;
mod tabs;

pub(crate) use accordion::AccordionTemplate;
pub(crate) use flipcard::FlipCardTemplate;
pub(crate) use slider::SliderTemplate;
pub(crate) use tabs::TabsTemplate;

use tabkit_model::Configuration;

use crate::markup::{close_document, open_body, open_document};

/// A complete document shape for one presentation mode.
pub(crate) trait ModeTemplate {
    /// Document `<title>`.
    const TITLE: &'static str;

    /// Write the stylesheet rules (inside `<style>`).
    fn style(config: &Configuration, out: &mut String);

    /// Write the body markup.
    fn body(config: &Configuration, out: &mut String);

    /// Write the inline behavior script contents, if the mode needs one.
    ///
    /// Default implementation writes nothing and no `<script>` is emitted.
    fn script(_config: &Configuration, _out: &mut String) {}
}

/// Assemble a full document from a template.
pub(crate) fn render_document<T: ModeTemplate>(config: &Configuration) -> String {
    let mut out = String::with_capacity(8192);

    open_document(&mut out, T::TITLE);
    T::style(config, &mut out);
    open_body(&mut out);
    T::body(config, &mut out);

    let mut script = String::new();
    T::script(config, &mut script);
    if !script.is_empty() {
        out.push_str("    <script>\n");
        out.push_str(&script);
        out.push_str("    </script>\n");
    }

    close_document(&mut out);
    out
}
