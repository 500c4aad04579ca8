use glam::vec2;

use super::Size;

/// Stacks sizes vertically: heights add up, the widest width wins.
pub fn accumulate_height(sizes: impl IntoIterator<Item = Size>) -> Size {
    let (mut height, mut width): (f32, f32) = (0.0, 0.0);
    for sz in sizes {
        height += sz.y;
        width = width.max(sz.x);
    }
    vec2(width, height)
}

pub fn accumulate_width(sizes: impl IntoIterator<Item = Size>) -> Size {
    let (mut width, mut height): (f32, f32) = (0.0, 0.0);
    for sz in sizes {
        width += sz.x;
        height = height.max(sz.y);
    }
    vec2(width, height)
}
