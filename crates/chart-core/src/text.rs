// File: crates/chart-core/src/text.rs
// Summary: Chart labels via Skia textlayout: font spec, anchoring and width measurement.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const SANS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const TABULAR: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    /// Titles, category names, legend entries.
    Label,
    /// Tick values; tabular digits line up in a column.
    Numeric,
}

/// Horizontal placement of a label relative to its anchor x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug)]
pub struct Font {
    pub size: f32,
    pub color: skia::Color,
    pub face: Face,
}

impl Font {
    pub const fn label(size: f32, color: skia::Color) -> Self {
        Self { size, color, face: Face::Label }
    }

    pub const fn numeric(size: f32, color: skia::Color) -> Self {
        Self { size, color, face: Face::Numeric }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    pub fn layout(&self, text: &str, font: &Font) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(font.size.max(1.0));
        style.set_color(font.color);
        style.set_font_families(match font.face {
            Face::Label => SANS,
            Face::Numeric => TABULAR,
        });

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        // single line; wide enough that nothing wraps
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &Font) -> f32 {
        self.layout(text, font).longest_line()
    }

    /// Draw `text` with its baseline at `y`, placed against `x` by `anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), anchor: Anchor, font: &Font) {
        let p = self.layout(text, font);
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - p.longest_line() * 0.5,
            Anchor::End => x - p.longest_line(),
        };
        // paragraphs paint from their top-left corner
        p.paint(canvas, (left, y - font.size * 0.8));
    }
}
