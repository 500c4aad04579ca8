use crate::layout::{Position, Rect, Size};

/// Anything a layout can place: it reports a minimum size and accepts a
/// position and a size from its parent.
pub trait Element {
    fn min_size(&self) -> Size;

    fn move_to(&mut self, pos: Position);

    fn resize(&mut self, size: Size);

    fn position(&self) -> Position;

    fn size(&self) -> Size;

    fn rect(&self) -> Rect {
        Rect::new(self.position(), self.size())
    }

    fn refresh(&mut self) {}
}
