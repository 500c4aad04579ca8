use glam::Vec2;

use super::Element;
use crate::{
    debug,
    layout::{Layout, Position, Size},
};

/// Upper bound on layout passes while children's minimum sizes keep changing.
const MAX_PASSES: usize = 4;

/// A group of elements arranged by one layout. Containers are elements
/// themselves, so they nest.
pub struct Container {
    layout: Box<dyn Layout>,
    objects: Vec<Box<dyn Element>>,
    position: Position,
    size: Size,
}

impl Container {
    pub fn new(layout: impl Layout + 'static, objects: Vec<Box<dyn Element>>) -> Self {
        Self {
            layout: Box::new(layout),
            objects,
            position: Vec2::ZERO,
            size: Vec2::ZERO,
        }
    }

    pub fn layout(&self) -> &dyn Layout {
        self.layout.as_ref()
    }

    pub fn objects(&self) -> &[Box<dyn Element>] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Box<dyn Element>] {
        &mut self.objects
    }

    pub fn add(&mut self, obj: impl Element + 'static) {
        log::debug!("adding {} to container", debug::element_type(&obj));
        self.objects.push(Box::new(obj));
        self.refresh();
    }

    fn relayout(&mut self) {
        log::debug!(
            "layout pass: {} children in {}",
            self.objects.len(),
            debug::describe(&*self)
        );

        let mut mins = self.child_min_sizes();
        for _ in 0..MAX_PASSES {
            self.layout.layout(&mut self.objects, self.size);
            let next = self.child_min_sizes();
            if next == mins {
                return;
            }
            mins = next;
        }
        log::warn!("layout did not settle after {MAX_PASSES} passes");
    }

    fn child_min_sizes(&self) -> Vec<Size> {
        self.objects.iter().map(|o| o.min_size()).collect()
    }
}

impl Element for Container {
    fn min_size(&self) -> Size {
        self.layout.min_size(&self.objects)
    }

    fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.relayout();
    }

    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn refresh(&mut self) {
        for o in self.objects.iter_mut() {
            o.refresh();
        }
        self.relayout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Axes, BoxLayout, CenterLayout, InsetLayout, Insets};
    use crate::widgets::{Rectangle, sized_box};
    use glam::vec2;

    #[test]
    fn test_container_min_size_delegates() {
        let c = Container::new(InsetLayout::new(Insets::uniform(2.0)), vec![sized_box(6.0, 4.0)]);
        assert_eq!(c.min_size(), vec2(10.0, 8.0));
    }

    #[test]
    fn test_container_resize_runs_layout() {
        let mut c = Container::new(CenterLayout::new(Axes::Both), vec![sized_box(10.0, 10.0)]);
        c.resize(vec2(30.0, 20.0));
        assert_eq!(c.size(), vec2(30.0, 20.0));
        assert_eq!(c.objects()[0].position(), vec2(10.0, 5.0));
    }

    #[test]
    fn test_container_move_does_not_relayout() {
        let mut c = Container::new(CenterLayout::new(Axes::Both), vec![sized_box(10.0, 10.0)]);
        c.move_to(vec2(7.0, 9.0));
        assert_eq!(c.position(), vec2(7.0, 9.0));
        assert_eq!(c.objects()[0].position(), Vec2::ZERO);
    }

    #[test]
    fn test_container_add_relayouts() {
        let mut c = Container::new(BoxLayout::horizontal(Insets::default(), 1.0), Vec::new());
        c.resize(vec2(100.0, 10.0));
        c.add(Rectangle::sized(vec2(5.0, 5.0)));
        c.add(Rectangle::sized(vec2(5.0, 5.0)));
        assert_eq!(c.objects()[1].position(), vec2(6.0, 0.0));
        assert_eq!(c.objects()[1].size(), vec2(5.0, 10.0));
        assert_eq!(c.min_size(), vec2(11.0, 5.0));
    }

    #[test]
    fn test_nested_containers() {
        let inner = Container::new(InsetLayout::new(Insets::uniform(5.0)), vec![sized_box(10.0, 10.0)]);
        let objs: Vec<Box<dyn Element>> = vec![Box::new(inner), sized_box(10.0, 4.0)];
        let mut outer = Container::new(BoxLayout::vertical(Insets::default(), 0.0), objs);
        assert_eq!(outer.min_size(), vec2(20.0, 24.0));

        outer.resize(vec2(40.0, 100.0));
        assert_eq!(outer.objects()[0].size(), vec2(40.0, 20.0));
        assert_eq!(outer.objects()[1].position(), vec2(0.0, 20.0));
    }
}
