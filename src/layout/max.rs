use glam::{Vec2, Vec4};

use super::{Layout, Size};
use crate::widgets::{Container, Element, Rectangle};

/// Stacks every child on top of each other, each filling the container.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct MaxLayout;

impl Layout for MaxLayout {
    fn min_size(&self, objects: &[Box<dyn Element>]) -> Size {
        objects
            .iter()
            .fold(Vec2::ZERO, |acc, o| acc.max(o.min_size()))
    }

    fn layout(&self, objects: &mut [Box<dyn Element>], size: Size) {
        for o in objects.iter_mut() {
            o.move_to(Vec2::ZERO);
            o.resize(size);
        }
    }
}

/// Paints a solid `color` behind `obj`.
pub fn background_color(color: impl Into<Vec4>, obj: impl Element + 'static) -> Container {
    let objs: Vec<Box<dyn Element>> = vec![Box::new(Rectangle::new(color)), Box::new(obj)];
    Container::new(MaxLayout, objs)
}
