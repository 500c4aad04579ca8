use glam::{Vec2, Vec4};

use super::Element;
use crate::layout::{Position, Size};

/// A solid filled rectangle. Its minimum size is zero unless set.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub color: Vec4,
    min: Size,
    position: Position,
    size: Size,
}

impl Rectangle {
    pub fn new(color: impl Into<Vec4>) -> Self {
        Self {
            color: color.into(),
            min: Vec2::ZERO,
            position: Vec2::ZERO,
            size: Vec2::ZERO,
        }
    }

    pub fn sized(size: Size) -> Self {
        Self::new(Vec4::ZERO).with_min_size(size).with_size(size)
    }

    pub fn with_min_size(mut self, min: Size) -> Self {
        self.min = min;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn set_min_size(&mut self, min: Size) {
        self.min = min;
    }
}

impl Element for Rectangle {
    fn min_size(&self) -> Size {
        self.min
    }

    fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }
}
