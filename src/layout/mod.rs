pub mod accumulate;
pub mod center;
pub mod inset;
pub mod inset_box;
pub mod max;
pub mod rect;

pub use accumulate::{accumulate_height, accumulate_width};
pub use center::{Axes, CenterLayout, center, h_center, hv_center, v_center};
pub use inset::{InsetLayout, Insets, h_padding, hv_padding, padding_all, v_padding};
pub use inset_box::{BoxLayout, boxed, h_box_padding, v_box_padding};
pub use max::{MaxLayout, background_color};
pub use rect::Rect;

use glam::{Vec2, vec2};

use crate::widgets::Element;

pub type Size = Vec2;
pub type Position = Vec2;

/// Positions and sizes the children of a container.
///
/// Implementations hold only their own configuration and are never mutated
/// by a layout pass, so running the same pass twice yields the same result.
pub trait Layout {
    fn min_size(&self, objects: &[Box<dyn Element>]) -> Size;

    fn layout(&self, objects: &mut [Box<dyn Element>], size: Size);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn main(self, v: Vec2) -> f32 {
        match self {
            Direction::Horizontal => v.x,
            Direction::Vertical => v.y,
        }
    }

    pub fn cross(self, v: Vec2) -> f32 {
        match self {
            Direction::Horizontal => v.y,
            Direction::Vertical => v.x,
        }
    }

    pub fn compose(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Direction::Horizontal => vec2(main, cross),
            Direction::Vertical => vec2(cross, main),
        }
    }
}

/// Single-child layouts only look at the first object.
pub(crate) fn first_only(name: &str, objects: &[Box<dyn Element>]) {
    if objects.len() > 1 {
        log::warn!(
            "{name} lays out a single child, ignoring {} extra",
            objects.len() - 1
        );
    }
}
