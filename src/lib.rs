pub mod debug;
pub mod layout;
pub mod style;
pub mod text;
pub mod widgets;

pub use layout::{
    Axes, BoxLayout, CenterLayout, Direction, InsetLayout, Insets, Layout, MaxLayout, Position,
    Rect, Size, accumulate_height, accumulate_width, background_color, boxed, center,
    h_box_padding, h_center, h_padding, hv_center, hv_padding, padding_all, v_box_padding,
    v_center, v_padding,
};
pub use style::{Heading, TextStyle, Theme};
pub use text::{CosmicMeasure, EstimateMeasure, TextContext, TextMeasure};
pub use widgets::{
    Container, Element, MarkupText, Paragraph, Rectangle, h1, h2, h3, h4, h5, h6,
    markup_text_flow, p,
};

pub use glam::{Vec2, Vec4, vec2};

pub type Result<T> = anyhow::Result<T>;

pub fn init_logging() {
    let _ = env_logger::try_init();
}
