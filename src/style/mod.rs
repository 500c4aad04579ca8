pub mod properties;
pub mod theme;

pub use properties::{Heading, TextStyle};
pub use theme::Theme;
