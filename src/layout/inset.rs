use glam::{Vec2, vec2};

use super::{Layout, Size, first_only};
use crate::widgets::{Container, Element};

/// Margins reserved on each side of a container.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }

    pub fn top_left(&self) -> Vec2 {
        vec2(self.left, self.top)
    }

    pub fn total(&self) -> Vec2 {
        vec2(self.left + self.right, self.top + self.bottom)
    }
}

/// Places a single child at the top-left margin. The child keeps its own size.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct InsetLayout {
    insets: Insets,
}

impl InsetLayout {
    pub fn new(insets: Insets) -> Self {
        Self { insets }
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }
}

impl Layout for InsetLayout {
    fn min_size(&self, objects: &[Box<dyn Element>]) -> Size {
        objects
            .first()
            .map_or(Vec2::ZERO, |o| o.min_size() + self.insets.total())
    }

    fn layout(&self, objects: &mut [Box<dyn Element>], _size: Size) {
        first_only("InsetLayout", objects);
        if let Some(obj) = objects.first_mut() {
            obj.move_to(self.insets.top_left());
        }
    }
}

pub fn padding_all(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    obj: impl Element + 'static,
) -> Container {
    Container::new(
        InsetLayout::new(Insets::new(left, right, top, bottom)),
        vec![Box::new(obj)],
    )
}

pub fn h_padding(horizontal: f32, obj: impl Element + 'static) -> Container {
    padding_all(horizontal, horizontal, 0.0, 0.0, obj)
}

pub fn v_padding(vertical: f32, obj: impl Element + 'static) -> Container {
    padding_all(0.0, 0.0, vertical, vertical, obj)
}

pub fn hv_padding(horizontal: f32, vertical: f32, obj: impl Element + 'static) -> Container {
    padding_all(horizontal, horizontal, vertical, vertical, obj)
}
