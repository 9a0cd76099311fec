//! Accordion mode: vertically stacked single-open sections.
//!
//! Each section is a hidden radio, a title and a content block, in that
//! sibling order. CSS expands the checked section; the script pins an
//! explicit `max-height` so the transition animates and collapses every
//! other section.

use std::fmt::Write;

use tabkit_model::Configuration;

use super::ModeTemplate;
use crate::markup::{body_rule, checked_if_first, paragraphs, video_frame, video_frame_rules};

const ACCORDION_SCRIPT: &str = "        document.addEventListener('DOMContentLoaded', function() {
            const accordionSelects = document.querySelectorAll('.accordion-select');
            accordionSelects.forEach(select => {
                select.addEventListener('change', function() {
                    const content = this.nextElementSibling.nextElementSibling;
                    if (this.checked) {
                        content.style.maxHeight = content.scrollHeight + 'px';
                    } else {
                        content.style.maxHeight = '0';
                    }

                    accordionSelects.forEach(otherSelect => {
                        if (otherSelect !== this) {
                            otherSelect.checked = false;
                            otherSelect.nextElementSibling.nextElementSibling.style.maxHeight = '0';
                        }
                    });
                });
            });
        });
";

pub(crate) struct AccordionTemplate;

impl ModeTemplate for AccordionTemplate {
    const TITLE: &'static str = "Accordion Tabs";

    fn style(config: &Configuration, out: &mut String) {
        let metrics = &config.metrics;
        let colors = &config.colors;

        body_rule(out, config, "");

        let frame = if config.full_page_layout {
            String::new()
        } else {
            format!(
                "            border-radius: {}px;
            max-width: 800px;
            margin: 0 auto;
",
                metrics.corner_radius
            )
        };

        let _ = write!(
            out,
            "        .accordion {{
            box-sizing: border-box;
            display: flex;
            font-family: {font};
            overflow: hidden;
            width: 100%;
            border-color: #393a50;
            border-style: solid;
            border-width: 0px;
            flex-direction: column;
            height: auto;
{frame}        }}
        .accordion-select {{
            cursor: pointer;
            margin: 0;
            opacity: 0;
            z-index: 1;
        }}
        .accordion-title {{
            position: relative;
        }}
        .accordion-title:not(:nth-last-child(2))::after {{
            border: 1px solid transparent;
            bottom: 0;
            content: \"\";
            left: 0;
            position: absolute;
            right: 0;
            top: 0;
        }}
        .accordion-title span {{
            bottom: 0px;
            box-sizing: border-box;
            display: block;
            position: absolute;
            white-space: nowrap;
            width: 100%;
        }}
        .accordion-content {{
            background-color: {content_bg};
            color: {content_text};
            max-height: 0;
            overflow: hidden;
            transition: max-height 0.3s ease-out, padding 0.3s ease-out;
            padding: 0 {padding}px;
            width: 100%;
        }}
        .accordion-select:checked + .accordion-title + .accordion-content {{
            max-height: 1000px;
            padding: {padding}px;
        }}
        .accordion-title,
        .accordion-select {{
            background-color: {tab_bg};
            color: {tab_text};
            width: 100%;
            height: {tab_height}px;
            font-size: {font_size}px;
        }}
        .accordion-select {{
            margin-bottom: -{tab_height}px;
            margin-right: 0;
        }}
        .accordion-title:not(:nth-last-child(2))::after {{
            border-bottom-color: {border};
            border-right-color: transparent;
        }}
        .accordion-select:hover + .accordion-title,
        .accordion-select:checked + .accordion-title {{
            background-color: {active_bg};
        }}
        .accordion-title span {{
            transform: rotate(0deg);
            padding-left: {padding}px;
            padding-right: {padding}px;
            line-height: {tab_height}px;
        }}
",
            font = config.font_family.css_stack(),
            content_bg = colors.content_background,
            content_text = colors.content_text,
            padding = metrics.content_padding,
            tab_bg = colors.tab_background,
            tab_text = colors.tab_text,
            tab_height = metrics.tab_height,
            font_size = metrics.font_size,
            border = colors.title_border,
            active_bg = colors.active_tab_background,
        );
        video_frame_rules(out, Some(20));
    }

    fn body(config: &Configuration, out: &mut String) {
        out.push_str("    <div class=\"accordion\">\n");
        for (index, tab) in config.tabs.iter().enumerate() {
            let _ = writeln!(
                out,
                "        <input type=\"radio\" name=\"accordion\" class=\"accordion-select\" id=\"tab{}\"{}>",
                index + 1,
                checked_if_first(index),
            );
            let _ = writeln!(
                out,
                "        <div class=\"accordion-title\"><span>{}</span></div>",
                tab.title
            );
            out.push_str("        <div class=\"accordion-content\">\n            ");
            paragraphs(out, &tab.content);
            out.push('\n');
            video_frame(out, tab, "            ");
            out.push_str("        </div>\n");
        }
        out.push_str("    </div>\n");
    }

    fn script(_config: &Configuration, out: &mut String) {
        out.push_str(ACCORDION_SCRIPT);
    }
}
