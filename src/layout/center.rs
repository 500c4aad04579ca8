use glam::{Vec2, vec2};

use super::{Layout, Size, first_only};
use crate::widgets::{Container, Element};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axes {
    Horizontal,
    Vertical,
    Both,
}

/// Centres a single child along one or both axes without resizing it.
///
/// Offsets are computed from the child's minimum size and are not clamped,
/// so a child larger than the container ends up at a negative offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CenterLayout {
    axes: Axes,
}

impl CenterLayout {
    pub fn new(axes: Axes) -> Self {
        Self { axes }
    }

    pub fn axes(&self) -> Axes {
        self.axes
    }
}

impl Layout for CenterLayout {
    fn min_size(&self, objects: &[Box<dyn Element>]) -> Size {
        objects.first().map_or(Vec2::ZERO, |o| o.min_size())
    }

    fn layout(&self, objects: &mut [Box<dyn Element>], size: Size) {
        first_only("CenterLayout", objects);
        let Some(obj) = objects.first_mut() else {
            return;
        };

        let free = (size - obj.min_size()) / 2.0;
        let pos = match self.axes {
            Axes::Horizontal => vec2(free.x, 0.0),
            Axes::Vertical => vec2(0.0, free.y),
            Axes::Both => free,
        };
        log::trace!("center {:?} -> {pos}", self.axes);
        obj.move_to(pos);
    }
}

pub fn center(axes: Axes, obj: impl Element + 'static) -> Container {
    Container::new(CenterLayout::new(axes), vec![Box::new(obj)])
}

pub fn h_center(obj: impl Element + 'static) -> Container {
    center(Axes::Horizontal, obj)
}

pub fn v_center(obj: impl Element + 'static) -> Container {
    center(Axes::Vertical, obj)
}

pub fn hv_center(obj: impl Element + 'static) -> Container {
    center(Axes::Both, obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::sized_box;

    fn run(axes: Axes, min: Vec2, container: Vec2) -> (Vec2, Vec2) {
        let mut objects = vec![sized_box(min.x, min.y)];
        CenterLayout::new(axes).layout(&mut objects, container);
        (objects[0].position(), objects[0].size())
    }

    #[test]
    fn test_center_horizontal() {
        let (pos, size) = run(Axes::Horizontal, vec2(10.0, 10.0), vec2(100.0, 100.0));
        assert_eq!(pos, vec2(45.0, 0.0));
        assert_eq!(size, vec2(10.0, 10.0));
    }

    #[test]
    fn test_center_vertical() {
        let (pos, size) = run(Axes::Vertical, vec2(10.0, 10.0), vec2(100.0, 60.0));
        assert_eq!(pos, vec2(0.0, 25.0));
        assert_eq!(size, vec2(10.0, 10.0));
    }

    #[test]
    fn test_center_both() {
        let (pos, _) = run(Axes::Both, vec2(20.0, 10.0), vec2(100.0, 50.0));
        assert_eq!(pos, vec2(40.0, 20.0));
    }

    #[test]
    fn test_center_oversized_child_goes_negative() {
        let (pos, size) = run(Axes::Both, vec2(120.0, 30.0), vec2(100.0, 20.0));
        assert_eq!(pos, vec2(-10.0, -5.0));
        assert_eq!(size, vec2(120.0, 30.0));
    }

    #[test]
    fn test_center_min_size_is_child_min() {
        let objects = vec![sized_box(12.0, 7.0)];
        assert_eq!(
            CenterLayout::new(Axes::Both).min_size(&objects),
            vec2(12.0, 7.0)
        );
    }

    #[test]
    fn test_center_empty() {
        let mut objects: Vec<Box<dyn Element>> = Vec::new();
        let layout = CenterLayout::new(Axes::Both);
        assert_eq!(layout.min_size(&objects), Vec2::ZERO);
        layout.layout(&mut objects, vec2(100.0, 100.0));
    }

    #[test]
    fn test_center_ignores_extra_children() {
        let mut objects = vec![sized_box(10.0, 10.0), sized_box(20.0, 20.0)];
        objects[1].move_to(vec2(3.0, 4.0));
        let layout = CenterLayout::new(Axes::Both);
        layout.layout(&mut objects, vec2(100.0, 100.0));
        assert_eq!(objects[0].position(), vec2(45.0, 45.0));
        assert_eq!(objects[1].position(), vec2(3.0, 4.0));
        assert_eq!(layout.min_size(&objects), vec2(10.0, 10.0));
    }

    #[test]
    fn test_center_is_idempotent() {
        let layout = CenterLayout::new(Axes::Both);
        let mut objects = vec![sized_box(10.0, 30.0)];
        layout.layout(&mut objects, vec2(50.0, 50.0));
        let first = objects[0].rect();
        objects[0].move_to(Vec2::ZERO);
        layout.layout(&mut objects, vec2(50.0, 50.0));
        assert_eq!(objects[0].rect(), first);
    }
}
