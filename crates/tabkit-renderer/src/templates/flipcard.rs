//! Flip-card mode: a wrapping grid of cards with title fronts and content
//! backs.

use std::fmt::Write;

use tabkit_model::Configuration;

use super::ModeTemplate;
use crate::markup::{
    body_rule, box_shadow, enlarged_font_size, paragraphs, video_frame,
    video_frame_rules,
};

/// Keeps at most one card flipped: flipping a card un-flips the previous one.
const FLIP_SCRIPT: &str = "        document.addEventListener('DOMContentLoaded', function() {
            const flipcards = document.querySelectorAll('.flipcard');
            let currentlyFlippedCard = null;

            flipcards.forEach(card => {
                card.addEventListener('click', function() {
                    if (currentlyFlippedCard && currentlyFlippedCard !== this) {
                        currentlyFlippedCard.classList.remove('flipped');
                    }

                    this.classList.toggle('flipped');

                    if (this.classList.contains('flipped')) {
                        currentlyFlippedCard = this;
                    } else {
                        currentlyFlippedCard = null;
                    }
                });
            });
        });
";

pub(crate) struct FlipCardTemplate;

impl ModeTemplate for FlipCardTemplate {
    const TITLE: &'static str = "Flipcard Tabs";

    fn style(config: &Configuration, out: &mut String) {
        let metrics = &config.metrics;
        let colors = &config.colors;

        body_rule(
            out,
            config,
            "            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
",
        );

        let _ = write!(
            out,
            "        .flipcard-container {{
            display: flex;
            flex-wrap: wrap;
            gap: 20px;
            justify-content: center;
            max-width: 1200px;
            margin: 0 auto;
        }}
        .flipcard {{
            width: 300px;
            height: 400px;
            perspective: 1000px;
            margin: 10px;
        }}
        .flipcard-inner {{
            position: relative;
            width: 100%;
            height: 100%;
            text-align: center;
            transition: transform 0.6s;
            transform-style: preserve-3d;
            box-shadow: {shadow};
            cursor: pointer;
        }}
        .flipcard.flipped .flipcard-inner {{
            transform: rotateY(180deg);
        }}
        .flipcard-front, .flipcard-back {{
            position: absolute;
            width: 100%;
            height: 100%;
            -webkit-backface-visibility: hidden;
            backface-visibility: hidden;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: flex-start;
            border-radius: {radius}px;
            overflow: hidden;
        }}
        .flipcard-front {{
            background-color: {tab_bg};
            color: {tab_text};
            font-size: {title_size}px;
            font-weight: bold;
            z-index: 2;
        }}
        .flipcard-back {{
            background-color: {content_bg};
            color: {content_text};
            transform: rotateY(180deg);
            padding: {padding}px;
            font-size: {font_size}px;
            overflow-y: auto;
            text-align: left;
        }}
        .flipcard-content {{
            width: 100%;
            max-height: 100%;
            overflow-y: auto;
        }}
",
            shadow = box_shadow(metrics.shadow_intensity),
            radius = metrics.corner_radius,
            tab_bg = colors.tab_background,
            tab_text = colors.tab_text,
            title_size = enlarged_font_size(metrics.font_size),
            content_bg = colors.content_background,
            content_text = colors.content_text,
            padding = metrics.content_padding,
            font_size = metrics.font_size,
        );
        video_frame_rules(out, Some(10));
    }

    fn body(config: &Configuration, out: &mut String) {
        out.push_str("    <div class=\"flipcard-container\">\n");
        for tab in &config.tabs {
            out.push_str("        <div class=\"flipcard\">\n");
            out.push_str("            <div class=\"flipcard-inner\">\n");
            let _ = writeln!(
                out,
                "                <div class=\"flipcard-front\">{}</div>",
                tab.title
            );
            out.push_str("                <div class=\"flipcard-back\">\n");
            out.push_str("                    <div class=\"flipcard-content\">");
            paragraphs(out, &tab.content);
            out.push('\n');
            video_frame(out, tab, "                        ");
            out.push_str("                    </div>\n");
            out.push_str("                </div>\n");
            out.push_str("            </div>\n");
            out.push_str("        </div>\n");
        }
        out.push_str("    </div>\n");
    }

    fn script(_config: &Configuration, out: &mut String) {
        out.push_str(FLIP_SCRIPT);
    }
}
