pub mod base;
pub mod container;
pub mod rectangle;
pub mod text;

pub use base::Element;
pub use container::Container;
pub use rectangle::Rectangle;
pub use text::{MarkupText, Paragraph, h1, h2, h3, h4, h5, h6, markup_text_flow, p};

#[cfg(test)]
pub(crate) fn sized_box(w: f32, h: f32) -> Box<dyn Element> {
    Box::new(Rectangle::sized(glam::vec2(w, h)))
}
