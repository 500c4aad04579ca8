use glam::Vec2;

use super::{Direction, Insets, Layout, Size};
use crate::widgets::{Container, Element};

/// Stacks children along `direction` with `spacing` between them and `insets`
/// around the group.
///
/// Each child keeps its minimum size on the stacking axis and is stretched to
/// the container's cross extent minus the cross margins. Nothing is clamped:
/// a container smaller than the margins yields negative cross sizes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxLayout {
    insets: Insets,
    spacing: f32,
    direction: Direction,
}

impl BoxLayout {
    pub fn new(direction: Direction, insets: Insets, spacing: f32) -> Self {
        Self {
            insets,
            spacing,
            direction,
        }
    }

    pub fn horizontal(insets: Insets, spacing: f32) -> Self {
        Self::new(Direction::Horizontal, insets, spacing)
    }

    pub fn vertical(insets: Insets, spacing: f32) -> Self {
        Self::new(Direction::Vertical, insets, spacing)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }
}

impl Layout for BoxLayout {
    fn min_size(&self, objects: &[Box<dyn Element>]) -> Size {
        if objects.is_empty() {
            return Vec2::ZERO;
        }
        let dir = self.direction;

        let (mut main_used, mut cross_max): (f32, f32) = (0.0, 0.0);
        for (i, o) in objects.iter().enumerate() {
            let min = o.min_size();
            if i != 0 {
                main_used += self.spacing;
            }
            main_used += dir.main(min);
            cross_max = cross_max.max(dir.cross(min));
        }

        let margins = self.insets.total();
        dir.compose(main_used + dir.main(margins), cross_max + dir.cross(margins))
    }

    fn layout(&self, objects: &mut [Box<dyn Element>], size: Size) {
        if objects.is_empty() {
            return;
        }
        let dir = self.direction;
        let origin = self.insets.top_left();
        let cross_avail = dir.cross(size) - dir.cross(self.insets.total());

        let mut cursor = dir.main(origin);
        for (i, o) in objects.iter_mut().enumerate() {
            let min = o.min_size();
            if i != 0 {
                cursor += self.spacing;
            }
            let pos = dir.compose(cursor, dir.cross(origin));
            let sz = dir.compose(dir.main(min), cross_avail);
            log::trace!("box[{i}] {dir:?} pos={pos} size={sz}");
            o.move_to(pos);
            o.resize(sz);
            cursor += dir.main(min);
        }
    }
}

pub fn boxed(
    direction: Direction,
    insets: Insets,
    spacing: f32,
    objs: Vec<Box<dyn Element>>,
) -> Container {
    Container::new(BoxLayout::new(direction, insets, spacing), objs)
}

/// Horizontal box: `horizontal` margin left and right, `vertical` top and bottom.
pub fn h_box_padding(
    horizontal: f32,
    vertical: f32,
    spacing: f32,
    objs: Vec<Box<dyn Element>>,
) -> Container {
    boxed(
        Direction::Horizontal,
        Insets::symmetric(horizontal, vertical),
        spacing,
        objs,
    )
}

pub fn v_box_padding(
    horizontal: f32,
    vertical: f32,
    spacing: f32,
    objs: Vec<Box<dyn Element>>,
) -> Container {
    boxed(
        Direction::Vertical,
        Insets::symmetric(horizontal, vertical),
        spacing,
        objs,
    )
}
