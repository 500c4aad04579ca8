pub mod measure;

pub use measure::{CosmicMeasure, EstimateMeasure, TextMeasure};

use std::rc::Rc;

use crate::style::Theme;

/// Theme and measurer shared by the text widgets of one UI.
#[derive(Clone)]
pub struct TextContext {
    pub theme: Rc<Theme>,
    pub measure: Rc<dyn TextMeasure>,
}

impl TextContext {
    pub fn new(theme: Theme, measure: impl TextMeasure + 'static) -> Self {
        Self {
            theme: Rc::new(theme),
            measure: Rc::new(measure),
        }
    }

    pub fn em(&self) -> f32 {
        self.theme.em()
    }
}

impl Default for TextContext {
    fn default() -> Self {
        Self::new(Theme::default(), EstimateMeasure)
    }
}
