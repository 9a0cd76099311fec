//! Self-contained HTML generation for tabkit widgets.
//!
//! [`render`] turns a [`Configuration`] into one complete document with the
//! stylesheet and behavior script inlined. The only external references in
//! the output are embedded YouTube players.
//!
//! # Architecture
//!
//! Each presentation mode has its own template implementing a small
//! internal trait (style, body, script). Templates share value formulas
//! (shadows, enlarged title size, paragraph splitting, video frames) but
//! derive their CSS independently, so a change to one mode never leaks into
//! another.
//!
//! # Example
//!
//! ```
//! use tabkit_model::{Configuration, Mode};
//!
//! let config = Configuration {
//!     mode: Mode::Accordion,
//!     ..Configuration::default()
//! };
//! let html = tabkit_renderer::render(&config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<title>Accordion Tabs</title>"));
//! ```

mod markup;
mod templates;
mod video;

pub use video::{embed_url, video_id};

use tabkit_model::{Configuration, Mode};

use templates::{
    AccordionTemplate, FlipCardTemplate, SliderTemplate, TabsTemplate, render_document,
};

/// Render the complete document for `config`.
///
/// Numeric fields are used as given; range checks belong to whoever builds
/// the configuration.
#[must_use]
pub fn render(config: &Configuration) -> String {
    let html = match config.mode {
        Mode::Tabs => render_document::<TabsTemplate>(config),
        Mode::Slider => render_document::<SliderTemplate>(config),
        Mode::FlipCard => render_document::<FlipCardTemplate>(config),
        Mode::Accordion => render_document::<AccordionTemplate>(config),
    };
    tracing::debug!(
        mode = %config.mode,
        tabs = config.tabs.len(),
        bytes = html.len(),
        "Rendered document"
    );
    html
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tabkit_model::TabEntry;

    use super::*;

    fn config_with(mode: Mode, tabs: Vec<TabEntry>) -> Configuration {
        Configuration {
            mode,
            tabs,
            ..Configuration::default()
        }
    }

    /// Markers that identify each document shape.
    fn shape_markers(mode: Mode) -> &'static str {
        match mode {
            Mode::Tabs => "<div class=\"tab-container\">",
            Mode::Slider => "<div class=\"slider\">",
            Mode::FlipCard => "<div class=\"flipcard-container\">",
            Mode::Accordion => "<div class=\"accordion\">",
        }
    }

    #[test]
    fn test_exactly_one_shape_per_mode() {
        for mode in Mode::ALL {
            let html = render(&config_with(mode, vec![TabEntry::placeholder(0)]));
            for other in Mode::ALL {
                assert_eq!(
                    html.contains(shape_markers(other)),
                    other == mode,
                    "{mode} document vs {other} marker"
                );
            }
        }
    }

    #[test]
    fn test_document_prologue() {
        for mode in Mode::ALL {
            let html = render(&config_with(mode, vec![TabEntry::placeholder(0)]));
            assert!(html.starts_with("<!DOCTYPE html>\n"));
            assert!(html.contains("<meta charset=\"UTF-8\">"));
            assert!(html.contains(
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
            ));
            assert!(html.ends_with("</html>\n"));
        }
    }

    #[test]
    fn test_titles_per_mode() {
        let titles = [
            (Mode::Tabs, "Custom Tabs"),
            (Mode::Slider, "Custom Slider"),
            (Mode::FlipCard, "Flipcard Tabs"),
            (Mode::Accordion, "Accordion Tabs"),
        ];
        for (mode, title) in titles {
            let html = render(&config_with(mode, vec![TabEntry::placeholder(0)]));
            assert!(html.contains(&format!("<title>{title}</title>")));
        }
    }

    #[test]
    fn test_structures_follow_input_order() {
        let tabs: Vec<TabEntry> = ["Alpha", "Bravo", "Charlie", "Delta"]
            .into_iter()
            .map(|title| TabEntry::new(title, "body"))
            .collect();

        for mode in Mode::ALL {
            let html = render(&config_with(mode, tabs.clone()));
            let positions: Vec<usize> = tabs
                .iter()
                .map(|tab| html.find(&format!(">{}<", tab.title)).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|pair| pair[0] < pair[1]),
                "{mode}: titles out of order"
            );
        }
    }

    #[test]
    fn test_structure_count_matches_tab_count() {
        let tabs: Vec<TabEntry> = (0..7).map(TabEntry::placeholder).collect();
        let cases = [
            (Mode::Tabs, "<div class=\"tab-content\" data-tab-content="),
            (Mode::Slider, "<div class=\"slide\">"),
            (Mode::FlipCard, "<div class=\"flipcard\">"),
            (Mode::Accordion, "<div class=\"accordion-content\">"),
        ];
        for (mode, marker) in cases {
            let html = render(&config_with(mode, tabs.clone()));
            assert_eq!(html.matches(marker).count(), 7, "{mode}");
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut config = Configuration::default();
        config.tabs[1].video_link = "https://youtu.be/dQw4w9WgXcQ".to_owned();
        for mode in Mode::ALL {
            config.mode = mode;
            assert_eq!(render(&config), render(&config));
        }
    }

    #[test]
    fn test_empty_middle_paragraph_kept() {
        let tabs = vec![TabEntry::new("Notes", "line one\n\nline two")];
        for mode in Mode::ALL {
            let html = render(&config_with(mode, tabs.clone()));
            assert!(
                html.contains("<p>line one</p><p></p><p>line two</p>"),
                "{mode}"
            );
        }
    }

    #[test]
    fn test_video_embedded_only_for_recognized_links() {
        let mut good = TabEntry::new("Video", "");
        good.video_link = "https://youtu.be/dQw4w9WgXcQ".to_owned();
        let mut bad = TabEntry::new("Broken", "");
        bad.video_link = "https://youtu.be/short".to_owned();

        for mode in Mode::ALL {
            let html = render(&config_with(mode, vec![good.clone(), bad.clone()]));
            assert_eq!(html.matches("<iframe").count(), 1, "{mode}");
            assert!(html.contains("src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\""));
        }
    }

    #[test]
    fn test_single_tab_renders_full_markup() {
        for mode in Mode::ALL {
            let html = render(&config_with(mode, vec![TabEntry::new("Only", "text")]));
            assert!(html.contains(shape_markers(mode)));
            assert!(html.contains(">Only<"));
        }
    }
}
