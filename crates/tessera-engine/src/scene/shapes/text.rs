use crate::coords::Rect;
use crate::paint::Color;
use crate::render::TextAlign;
use crate::scene::{DrawCmd, DrawList};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Box the text is laid out in, in logical pixels.
    pub bounds: Rect,
    pub color: Color,
    pub align: TextAlign,
}

impl DrawList {
    pub fn push_text(&mut self, text: impl Into<String>, bounds: Rect, color: Color, align: TextAlign) {
        self.push(DrawCmd::Text(TextCmd { text: text.into(), bounds, color, align }));
    }
}
