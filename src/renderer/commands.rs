//! Recording surface
//!
//! Captures draw calls in order instead of rasterizing them. Used to inspect
//! what a frame would paint (tests, `--dump` in the native driver).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::surface::{Color, Surface};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    /// Corner colors in top-left, top-right, bottom-left, bottom-right order
    GradientRect {
        origin: Vec2,
        size: Vec2,
        corners: [Color; 4],
    },
}

impl DrawCommand {
    /// Origin of the painted area (`None` for clears)
    pub fn origin(&self) -> Option<Vec2> {
        match self {
            DrawCommand::Clear { .. } => None,
            DrawCommand::FillRect { origin, .. } | DrawCommand::GradientRect { origin, .. } => {
                Some(*origin)
            }
        }
    }
}

/// Surface that records every call
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandList {
    size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget recorded commands, keeping the surface size
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Serialize the recorded frame as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Surface for CommandList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn gradient_fill_rect(
        &mut self,
        origin: Vec2,
        size: Vec2,
        top_left: Color,
        top_right: Color,
        bottom_left: Color,
        bottom_right: Color,
    ) {
        self.commands.push(DrawCommand::GradientRect {
            origin,
            size,
            corners: [top_left, top_right, bottom_left, bottom_right],
        });
    }
}
