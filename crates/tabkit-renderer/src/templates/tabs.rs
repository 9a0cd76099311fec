//! Tabs mode: a tab strip on one edge and a single visible content pane.
//!
//! Layout, borders and shadows differ by [`TabPosition`]. The behavior
//! script fades the outgoing pane out, swaps `display` once it is hidden,
//! then fades the incoming pane in and restyles the labels.

use std::fmt::Write;

use tabkit_model::{Configuration, TabPosition};

use super::ModeTemplate;
use crate::markup::{
    body_rule, box_shadow, checked_if_first, content_height, escape_js, paragraphs,
    video_frame, video_frame_rules,
};

/// Fade-out duration; the outgoing pane is hidden when it elapses.
const FADE_OUT_MS: u32 = 200;

/// Delay before the incoming pane is shown, always after [`FADE_OUT_MS`].
const SHOW_DELAY_MS: u32 = 210;

pub(crate) struct TabsTemplate;

impl ModeTemplate for TabsTemplate {
    const TITLE: &'static str = "Custom Tabs";

    fn style(config: &Configuration, out: &mut String) {
        body_rule(out, config, "");
        container_rule(config, out);
        nav_rule(config, out);
        label_rule(config, out);
        content_rules(config, out);
        corner_rules(config, out);
        video_frame_rules(out, None);
    }

    fn body(config: &Configuration, out: &mut String) {
        out.push_str("    <div class=\"tab-container\">\n");

        out.push_str("        <div class=\"tab-nav\">\n");
        for (index, tab) in config.tabs.iter().enumerate() {
            let n = index + 1;
            let _ = writeln!(
                out,
                "            <input type=\"radio\" name=\"tabs\" id=\"tab{n}\" class=\"tab-select\"{}>",
                checked_if_first(index),
            );
            let _ = writeln!(
                out,
                "            <label for=\"tab{n}\" class=\"tab-label\">{}</label>",
                tab.title
            );
        }
        out.push_str("        </div>\n");

        out.push_str("        <div class=\"tab-content-container\">\n");
        for (index, tab) in config.tabs.iter().enumerate() {
            let _ = write!(
                out,
                "            <div class=\"tab-content\" data-tab-content=\"tab{}\">\n                ",
                index + 1
            );
            paragraphs(out, &tab.content);
            out.push('\n');
            video_frame(out, tab, "                ");
            out.push_str("            </div>\n");
        }
        out.push_str("        </div>\n");

        out.push_str("    </div>\n");
    }

    fn script(config: &Configuration, out: &mut String) {
        let colors = &config.colors;
        let title_shadow = config.metrics.title_shadow_intensity;
        let (fade_out, show_delay) = if config.animated {
            (FADE_OUT_MS, SHOW_DELAY_MS)
        } else {
            (0, 0)
        };
        let selected_shadow = match config.effective_tab_position() {
            TabPosition::Bottom => format!(
                "0 -{title_shadow}px {}px rgba(0, 0, 0, 0.2)",
                title_shadow * 2
            ),
            TabPosition::Top | TabPosition::Left | TabPosition::Right => {
                format!("{title_shadow}px {}px rgba(0, 0, 0, 0.2)", title_shadow * 2)
            }
        };

        let _ = write!(
            out,
            "        const isDarkTheme = {dark};
        document.addEventListener('DOMContentLoaded', function() {{
            const tabSelects = document.querySelectorAll('.tab-select');
            tabSelects.forEach(input => {{
                input.addEventListener('change', function() {{
                    const activeContent = document.querySelector('.tab-content.active');
                    if (activeContent) {{
                        activeContent.style.opacity = '0';
                        if (isDarkTheme) {{
                            activeContent.style.backgroundColor = '{tab_bg}';
                        }}
                        setTimeout(() => {{
                            activeContent.style.display = 'none';
                            activeContent.classList.remove('active');
                        }}, {fade_out});
                    }}

                    const newContent = document.querySelector('.tab-content[data-tab-content=\"' + this.id + '\"]');
                    if (newContent) {{
                        setTimeout(() => {{
                            newContent.style.display = 'block';
                            newContent.classList.add('active');
                            requestAnimationFrame(() => {{
                                newContent.style.opacity = '1';
                                if (isDarkTheme) {{
                                    newContent.style.backgroundColor = '{content_bg}';
                                }}
                            }});
                        }}, {show_delay});
                    }}

                    const tabLabels = document.querySelectorAll('.tab-label');
                    tabLabels.forEach(label => {{
                        label.style.backgroundColor = '{tab_bg}';
                        label.style.boxShadow = '{title_shadow}px {title_shadow}px {title_blur}px rgba(0, 0, 0, 0.1)';
                    }});

                    this.nextElementSibling.style.backgroundColor = '{active_bg}';
                    this.nextElementSibling.style.boxShadow = '{selected_shadow}';
                }});
            }});

            const initialActiveTab = document.querySelector('.tab-select:checked');
            if (initialActiveTab) {{
                initialActiveTab.dispatchEvent(new Event('change'));
            }}
        }});
",
            dark = config.is_dark_theme(),
            tab_bg = escape_js(&colors.tab_background),
            content_bg = escape_js(&colors.content_background),
            active_bg = escape_js(&colors.active_tab_background),
            title_blur = title_shadow * 2,
        );
    }
}

/// `.tab-container`: outer frame and flex direction for the strip edge.
fn container_rule(config: &Configuration, out: &mut String) {
    let metrics = &config.metrics;
    let direction = match config.effective_tab_position() {
        TabPosition::Top => "column",
        TabPosition::Bottom => "column-reverse",
        TabPosition::Left => "row",
        TabPosition::Right => "row-reverse",
    };
    let frame = if config.full_page_layout {
        String::new()
    } else {
        format!(
            "            max-width: 800px;
            border: 1px solid #ccc;
            border-radius: {radius}px;
            box-shadow: {shadow};
",
            radius = metrics.corner_radius,
            shadow = box_shadow(metrics.shadow_intensity),
        )
    };

    let _ = write!(
        out,
        "        .tab-container {{
            width: 100%;
            margin: 0 auto;
            background-color: #ffffff;
{frame}            overflow: hidden;
            display: flex;
            flex-direction: {direction};
        }}
"
    );
}

/// `.tab-nav`: the strip itself.
fn nav_rule(config: &Configuration, out: &mut String) {
    let position = config.effective_tab_position();
    let layout = match position {
        TabPosition::Top | TabPosition::Bottom => "            flex-direction: row;\n",
        TabPosition::Left => {
            "            flex-direction: column;
            width: 200px;
            flex-shrink: 0;
            align-items: flex-start;
"
        }
        TabPosition::Right => {
            "            flex-direction: column;
            width: 200px;
            flex-shrink: 0;
            align-items: flex-end;
"
        }
    };

    let _ = write!(
        out,
        "        .tab-nav {{
            display: flex;
            background-color: {group_bg};
{layout}        }}
",
        group_bg = config.colors.title_group_background,
    );
}

/// `.tab-label`: sizing, colors, and the per-edge border and shadow.
fn label_rule(config: &Configuration, out: &mut String) {
    let metrics = &config.metrics;
    let colors = &config.colors;
    let position = config.effective_tab_position();
    let height = metrics.tab_height;
    let shadow = metrics.title_shadow_intensity;
    let blur = shadow * 2;
    let border = format!("{}px solid {}", metrics.title_border_size, colors.title_border);

    let sizing = if position.is_horizontal() {
        format!(
            "            flex: 1;
            text-align: center;
            padding: 0;
            height: {height}px;
            line-height: {height}px;
"
        )
    } else {
        let (justify, align) = if position == TabPosition::Left {
            ("flex-start", "left")
        } else {
            ("flex-end", "right")
        };
        format!(
            "            width: 100%;
            height: {height}px;
            line-height: {height}px;
            writing-mode: horizontal-tb;
            text-orientation: mixed;
            padding: 10px;
            display: flex;
            align-items: center;
            justify-content: {justify};
            text-align: {align};
"
        )
    };

    let edge = match position {
        TabPosition::Top => format!(
            "            border-right: {border};
            box-shadow: {shadow}px {shadow}px {blur}px rgba(0, 0, 0, 0.1);
"
        ),
        TabPosition::Left => format!(
            "            border-bottom: {border};
            box-shadow: {shadow}px {shadow}px rgba(0, 0, 0, 0.1);
"
        ),
        TabPosition::Right => format!(
            "            border-left: {border};
            border-bottom: {border};
            box-shadow: -{shadow}px {shadow}px rgba(0, 0, 0, 0.1);
"
        ),
        TabPosition::Bottom => format!(
            "            border-top: {border};
            box-shadow: 0 -{shadow}px {blur}px rgba(0, 0, 0, 0.1);
"
        ),
    };

    let _ = write!(
        out,
        "        .tab-label {{
{sizing}            background-color: {tab_bg};
            color: {tab_text};
            font-size: {font_size}px;
            cursor: pointer;
            transition: background-color 0.3s ease;
{edge}        }}
        .tab-select {{
            display: none;
        }}
",
        tab_bg = colors.tab_background,
        tab_text = colors.tab_text,
        font_size = metrics.font_size,
    );
}

/// Content pane rules, including the fade when animation is on.
fn content_rules(config: &Configuration, out: &mut String) {
    let metrics = &config.metrics;
    let colors = &config.colors;
    let position = config.effective_tab_position();
    let height = content_height(config);

    let container_extra = match position {
        TabPosition::Top | TabPosition::Bottom => "",
        TabPosition::Left => "            height: 400px;\n            overflow-y: auto;\n            order: 1;\n",
        TabPosition::Right => "            height: 400px;\n            overflow-y: auto;\n            order: 0;\n",
    };

    let (fade, shown) = if config.animated {
        let transition = if config.is_dark_theme() {
            "opacity 0.2s ease-out, background-color 0.2s ease-out"
        } else {
            "opacity 0.2s ease-out"
        };
        (
            format!("            opacity: 0;\n            transition: {transition};\n"),
            "            opacity: 1;\n",
        )
    } else {
        (String::new(), "")
    };

    let _ = write!(
        out,
        "        .tab-content-container {{
            flex: 1;
{container_extra}        }}
        .tab-content {{
            padding: {padding}px;
            background-color: {content_bg};
            color: {content_text};
            height: {height};
            min-height: {height};
            overflow-y: auto;
            display: none;
            text-align: left;
{fade}        }}
        .tab-content.active {{
            display: block;
{shown}        }}
",
        padding = metrics.content_padding,
        content_bg = colors.content_background,
        content_text = colors.content_text,
    );
}

/// Rounded outer corners on the first and last label.
fn corner_rules(config: &Configuration, out: &mut String) {
    if config.full_page_layout {
        return;
    }
    let edge = if config.effective_tab_position() == TabPosition::Bottom {
        "bottom"
    } else {
        "top"
    };
    let _ = write!(
        out,
        "        .tab-label:first-of-type {{
            border-{edge}-left-radius: {radius}px;
        }}
        .tab-label:last-of-type {{
            border-{edge}-right-radius: {radius}px;
        }}
",
        radius = config.metrics.corner_radius,
    );
}

#[cfg(test)]
mod tests {
    use tabkit_model::{TabEntry, Theme};

    use super::*;
    use crate::templates::render_document;

    fn tabs_config(position: TabPosition) -> Configuration {
        Configuration {
            tab_position: position,
            ..Configuration::default()
        }
    }

    fn render(config: &Configuration) -> String {
        render_document::<TabsTemplate>(config)
    }

    #[test]
    fn test_label_and_pane_per_tab() {
        let html = render(&Configuration::default());
        assert_eq!(html.matches("class=\"tab-label\">").count(), 3);
        assert_eq!(html.matches("<div class=\"tab-content\" data-tab-content=").count(), 3);
        assert!(html.contains("id=\"tab1\" class=\"tab-select\" checked>"));
        assert!(html.contains("id=\"tab3\" class=\"tab-select\">"));
    }

    #[test]
    fn test_flex_direction_per_position() {
        let cases = [
            (TabPosition::Top, "flex-direction: column;"),
            (TabPosition::Bottom, "flex-direction: column-reverse;"),
            (TabPosition::Left, "flex-direction: row;"),
            (TabPosition::Right, "flex-direction: row-reverse;"),
        ];
        for (position, expected) in cases {
            let html = render(&tabs_config(position));
            let container = &html[html.find(".tab-container {").unwrap()..];
            let container = &container[..container.find('}').unwrap()];
            assert!(
                container.contains(expected),
                "{position:?}: expected {expected} in {container}"
            );
        }
    }

    #[test]
    fn test_vertical_nav_has_fixed_width() {
        let html = render(&tabs_config(TabPosition::Left));
        assert!(html.contains("width: 200px;"));
        assert!(html.contains("align-items: flex-start;"));
        assert!(html.contains("order: 1;"));

        let html = render(&tabs_config(TabPosition::Right));
        assert!(html.contains("align-items: flex-end;"));
        assert!(html.contains("order: 0;"));

        let html = render(&tabs_config(TabPosition::Top));
        assert!(!html.contains("width: 200px;"));
    }

    #[test]
    fn test_border_edge_per_position() {
        let mut config = tabs_config(TabPosition::Top);
        config.metrics.title_border_size = 3;
        config.colors.title_border = "#abcdef".to_owned();
        assert!(render(&config).contains("border-right: 3px solid #abcdef;"));

        config.tab_position = TabPosition::Left;
        assert!(render(&config).contains("border-bottom: 3px solid #abcdef;"));

        config.tab_position = TabPosition::Right;
        let html = render(&config);
        assert!(html.contains("border-left: 3px solid #abcdef;"));
        assert!(html.contains("border-bottom: 3px solid #abcdef;"));

        config.tab_position = TabPosition::Bottom;
        let html = render(&config);
        assert!(html.contains("border-top: 3px solid #abcdef;"));
        assert!(html.contains("border-bottom-left-radius:"));
    }

    #[test]
    fn test_label_shadow_per_position() {
        let mut config = tabs_config(TabPosition::Left);
        config.metrics.title_shadow_intensity = 3;
        assert!(render(&config).contains("box-shadow: 3px 3px rgba(0, 0, 0, 0.1);"));

        config.tab_position = TabPosition::Right;
        assert!(render(&config).contains("box-shadow: -3px 3px rgba(0, 0, 0, 0.1);"));

        config.tab_position = TabPosition::Top;
        assert!(render(&config).contains("box-shadow: 3px 3px 6px rgba(0, 0, 0, 0.1);"));

        config.tab_position = TabPosition::Bottom;
        assert!(render(&config).contains("box-shadow: 0 -3px 6px rgba(0, 0, 0, 0.1);"));
    }

    #[test]
    fn test_inline_markup_in_title_and_content() {
        let config = Configuration {
            tabs: vec![TabEntry::new(
                "<em>T</em>",
                "see <a href=\"x\">link</a> & <b>bold</b>",
            )],
            ..Configuration::default()
        };
        let html = render(&config);
        assert!(html.contains("class=\"tab-label\"><em>T</em></label>"));
        assert!(html.contains("<p>see <a href=\"x\">link</a> & <b>bold</b></p>"));
    }

    #[test]
    fn test_auto_height_overrides_fixed_height() {
        let mut config = Configuration::default();
        config.metrics.content_height = 350;
        let html = render(&config);
        assert!(html.contains("height: auto;"));
        assert!(!html.contains("height: 350px;"));

        config.auto_height = false;
        assert!(render(&config).contains("min-height: 350px;"));
    }

    #[test]
    fn test_full_page_drops_frame() {
        let mut config = Configuration::default();
        config.metrics.shadow_intensity = 4;
        let html = render(&config);
        assert!(html.contains("border: 1px solid #ccc;"));
        assert!(html.contains("box-shadow: 0 4px 8px rgba(0, 0, 0, 0.4);"));
        assert!(html.contains(".tab-label:first-of-type"));

        config.full_page_layout = true;
        let html = render(&config);
        assert!(!html.contains("border: 1px solid #ccc;"));
        assert!(!html.contains("max-width: 800px;"));
        assert!(!html.contains(".tab-label:first-of-type"));
        assert!(html.contains("padding: 0;"));
    }

    #[test]
    fn test_animation_rules() {
        let mut config = Configuration::default();
        let html = render(&config);
        assert!(html.contains("transition: opacity 0.2s ease-out;"));
        assert!(html.contains("}, 200);"));
        assert!(html.contains("}, 210);"));

        config.animated = false;
        let html = render(&config);
        assert!(!html.contains("opacity 0.2s"));
        assert!(html.contains("}, 0);"));
    }

    #[test]
    fn test_dark_theme_recolors_during_fade() {
        let mut config = Configuration {
            theme: Theme::Dark,
            ..Configuration::default()
        };
        config.colors.tab_background = "#333333".to_owned();
        config.colors.content_background = "#1a1a1a".to_owned();
        let html = render(&config);
        assert!(html.contains("const isDarkTheme = true;"));
        assert!(html.contains("background-color 0.2s ease-out"));
        assert!(html.contains("activeContent.style.backgroundColor = '#333333';"));
        assert!(html.contains("newContent.style.backgroundColor = '#1a1a1a';"));

        config.theme = Theme::Custom;
        assert!(render(&config).contains("const isDarkTheme = false;"));
    }

    #[test]
    fn test_script_hides_before_showing() {
        let html = render(&Configuration::default());
        let hide = html.find("activeContent.style.display = 'none';").unwrap();
        let show = html.find("newContent.style.display = 'block';").unwrap();
        assert!(hide < show);
        assert!(html.contains("initialActiveTab.dispatchEvent(new Event('change'));"));
    }

    #[test]
    fn test_selected_label_shadow_for_bottom() {
        let mut config = tabs_config(TabPosition::Bottom);
        config.metrics.title_shadow_intensity = 2;
        let html = render(&config);
        assert!(html.contains("this.nextElementSibling.style.boxShadow = '0 -2px 4px rgba(0, 0, 0, 0.2)';"));
    }

    #[test]
    fn test_tenth_tab_targets_own_pane() {
        let config = Configuration {
            tabs: (0..10).map(TabEntry::placeholder).collect(),
            ..Configuration::default()
        };
        let html = render(&config);
        assert!(html.contains("data-tab-content=\"tab10\""));
        assert!(html.contains("'.tab-content[data-tab-content=\"' + this.id + '\"]'"));
    }
}
