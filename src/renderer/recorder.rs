//! Canvas that records draw calls instead of painting them
//!
//! Used by the headless native build and by tests to inspect what a frame
//! would draw.

use glam::Vec2;

use super::{Canvas, TextStyle};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Image { sprite: String, pos: Vec2 },
    Text { text: String, pos: Vec2 },
}

/// Records the draw calls of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls since the last `begin_frame`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames begun
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Positions at which `sprite` was drawn this frame
    pub fn positions_of(&self, sprite: &str) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { sprite: s, pos } if s == sprite => Some(*pos),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }

    fn draw_image(&mut self, sprite: &str, pos: Vec2) {
        log::trace!("draw {} at ({:.1}, {:.1})", sprite, pos.x, pos.y);
        self.commands.push(DrawCommand::Image {
            sprite: sprite.to_string(),
            pos,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, _style: &TextStyle) {
        log::trace!("text {:?} at ({:.1}, {:.1})", text, pos.x, pos.y);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
        });
    }
}
