//! Slider mode: a horizontal carousel driven by hidden radio buttons.
//!
//! One radio per slide (`btn-1`..`btn-N`) holds the state. Sibling selectors
//! translate the slide strip and highlight the matching dot, so the slider
//! works without script.

use std::fmt::Write;

use tabkit_model::Configuration;

use super::ModeTemplate;
use crate::markup::{
    body_rule, box_shadow, checked_if_first, content_height, enlarged_font_size,
    paragraphs, video_frame, video_frame_rules,
};

pub(crate) struct SliderTemplate;

impl ModeTemplate for SliderTemplate {
    const TITLE: &'static str = "Custom Slider";

    fn style(config: &Configuration, out: &mut String) {
        let metrics = &config.metrics;
        let colors = &config.colors;
        let height = content_height(config);

        body_rule(out, config, "");

        let radius = if config.full_page_layout {
            String::new()
        } else {
            format!("            border-radius: {}px;\n", metrics.corner_radius)
        };
        let _ = write!(
            out,
            "        .slider {{
            position: relative;
            width: 100%;
            height: {height};
            min-height: {height};
            margin: 0 auto;
            box-shadow: {shadow};
            background-color: {content_bg};
            overflow: hidden;
{radius}        }}
        .slider-controls {{
            position: absolute;
            bottom: 20px;
            left: 50%;
            transform: translateX(-50%);
            display: flex;
            gap: 10px;
            z-index: 1000;
        }}
        .slider input[type=\"radio\"] {{
            display: none;
        }}
        .slider-controls label {{
            display: inline-block;
            width: 12px;
            height: 12px;
            border-radius: 50%;
            background-color: {tab_bg};
            cursor: pointer;
            transition: background-color 0.3s ease;
        }}
        .slider-controls label:hover {{
            background-color: {active_bg};
        }}
",
            shadow = box_shadow(metrics.shadow_intensity),
            content_bg = colors.content_background,
            tab_bg = colors.tab_background,
            active_bg = colors.active_tab_background,
        );

        for n in 1..=config.tabs.len() {
            let _ = write!(
                out,
                "        #btn-{n}:checked ~ .slider-controls label[for=\"btn-{n}\"] {{
            background-color: {active_bg};
        }}
",
                active_bg = colors.active_tab_background,
            );
        }

        let _ = write!(
            out,
            "        .slides {{
            display: flex;
            transition: transform 0.5s ease-in-out;
            height: 100%;
        }}
        .slide {{
            flex: 0 0 100%;
            padding: {padding}px;
            box-sizing: border-box;
            background-color: {content_bg};
            color: {content_text};
            font-size: {font_size}px;
            overflow-y: auto;
        }}
",
            padding = metrics.content_padding,
            content_bg = colors.content_background,
            content_text = colors.content_text,
            font_size = metrics.font_size,
        );

        for index in 0..config.tabs.len() {
            let _ = write!(
                out,
                "        #btn-{n}:checked ~ .slides {{
            transform: translateX(-{offset}%);
        }}
",
                n = index + 1,
                offset = index * 100,
            );
        }

        let _ = write!(
            out,
            "        .slide-title {{
            font-size: {title_size}px;
            margin-bottom: 15px;
        }}
",
            title_size = enlarged_font_size(metrics.font_size),
        );
        video_frame_rules(out, None);
    }

    fn body(config: &Configuration, out: &mut String) {
        out.push_str("    <div class=\"slider\">\n");
        for index in 0..config.tabs.len() {
            let _ = writeln!(
                out,
                "        <input type=\"radio\" name=\"slider\" id=\"btn-{}\"{}>",
                index + 1,
                checked_if_first(index),
            );
        }

        out.push_str("        <div class=\"slider-controls\">\n");
        for n in 1..=config.tabs.len() {
            let _ = writeln!(out, "            <label for=\"btn-{n}\"></label>");
        }
        out.push_str("        </div>\n");

        out.push_str("        <div class=\"slides\">\n");
        for tab in &config.tabs {
            out.push_str("            <div class=\"slide\">\n");
            let _ = writeln!(
                out,
                "                <h2 class=\"slide-title\">{}</h2>",
                tab.title
            );
            out.push_str("                <div class=\"slide-content\">");
            paragraphs(out, &tab.content);
            out.push_str("</div>\n");
            video_frame(out, tab, "                ");
            out.push_str("            </div>\n");
        }
        out.push_str("        </div>\n");
        out.push_str("    </div>\n");
    }
}

#[cfg(test)]
mod tests {
    use tabkit_model::{Mode, TabEntry};

    use super::*;
    use crate::templates::render_document;

    fn slider_config(tabs: usize) -> Configuration {
        Configuration {
            mode: Mode::Slider,
            tabs: (0..tabs).map(TabEntry::placeholder).collect(),
            ..Configuration::default()
        }
    }

    #[test]
    fn test_one_radio_and_dot_per_slide() {
        let html = render_document::<SliderTemplate>(&slider_config(4));
        assert_eq!(html.matches("<input type=\"radio\" name=\"slider\"").count(), 4);
        assert_eq!(html.matches("<label for=\"btn-").count(), 4);
        assert_eq!(html.matches("<div class=\"slide\">").count(), 4);
    }

    #[test]
    fn test_only_first_radio_checked() {
        let html = render_document::<SliderTemplate>(&slider_config(3));
        assert!(html.contains("id=\"btn-1\" checked>"));
        assert!(html.contains("id=\"btn-2\">"));
        assert!(html.contains("id=\"btn-3\">"));
    }

    #[test]
    fn test_translate_offsets() {
        let html = render_document::<SliderTemplate>(&slider_config(3));
        assert!(html.contains("#btn-1:checked ~ .slides"));
        assert!(html.contains("transform: translateX(-0%);"));
        assert!(html.contains("transform: translateX(-200%);"));
    }

    #[test]
    fn test_title_font_enlarged() {
        let mut config = slider_config(1);
        config.metrics.font_size = 13;
        let html = render_document::<SliderTemplate>(&config);
        assert!(html.contains("font-size: 19.5px;"));
    }

    #[test]
    fn test_fixed_height_when_auto_off() {
        let mut config = slider_config(1);
        config.auto_height = false;
        config.metrics.content_height = 400;
        let html = render_document::<SliderTemplate>(&config);
        assert!(html.contains("height: 400px;"));
        assert!(html.contains("min-height: 400px;"));
    }

    #[test]
    fn test_full_page_drops_radius() {
        let mut config = slider_config(1);
        config.metrics.corner_radius = 12;
        let html = render_document::<SliderTemplate>(&config);
        assert!(html.contains("border-radius: 12px;"));

        config.full_page_layout = true;
        let html = render_document::<SliderTemplate>(&config);
        assert!(!html.contains("border-radius: 12px;"));
        assert!(html.contains("padding: 0;"));
    }

    #[test]
    fn test_no_script() {
        let html = render_document::<SliderTemplate>(&slider_config(2));
        assert!(!html.contains("<script>"));
    }
}
