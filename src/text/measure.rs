use std::sync::{Arc, Mutex, PoisonError};

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, Weight};
use glam::{Vec2, vec2};

use crate::{layout::Size, style::TextStyle};

const ADVANCE: f32 = 0.6;
const LINE_HEIGHT: f32 = 1.2;

/// Measures the extent of a run of text.
///
/// With `max_width` set the text is word-wrapped to that width; otherwise only
/// explicit line breaks start a new line. Empty text measures as zero.
pub trait TextMeasure {
    fn measure(&self, text: &str, style: TextStyle, max_width: Option<f32>) -> Size;

    fn line_height(&self, style: TextStyle) -> f32 {
        style.size * LINE_HEIGHT
    }
}

/// Fixed-advance estimate. Every character is `0.6 * size` wide, no font is
/// consulted, so results are deterministic.
#[derive(Copy, Clone, Debug, Default)]
pub struct EstimateMeasure;

impl EstimateMeasure {
    fn width(chars: usize, style: TextStyle) -> f32 {
        chars as f32 * (style.size * ADVANCE)
    }
}

impl TextMeasure for EstimateMeasure {
    fn measure(&self, text: &str, style: TextStyle, max_width: Option<f32>) -> Size {
        if text.is_empty() {
            return Vec2::ZERO;
        }

        let mut lines = 0usize;
        let mut widest = 0usize;

        for line in text.split('\n') {
            let Some(max_width) = max_width else {
                lines += 1;
                widest = widest.max(line.chars().count());
                continue;
            };

            let mut current = 0usize;
            lines += 1;
            for word in line.split_whitespace() {
                let len = word.chars().count();
                let candidate = if current == 0 { len } else { current + 1 + len };
                if current != 0 && Self::width(candidate, style) > max_width {
                    widest = widest.max(current);
                    lines += 1;
                    current = len;
                } else {
                    current = candidate;
                }
            }
            widest = widest.max(current);
        }

        vec2(
            Self::width(widest, style),
            lines as f32 * self.line_height(style),
        )
    }
}

/// Shapes text with `cosmic-text` against the system fonts.
#[derive(Clone)]
pub struct CosmicMeasure {
    font_system: Arc<Mutex<FontSystem>>,
}

impl CosmicMeasure {
    pub fn new() -> Self {
        log::info!("initializing font system");
        Self::with_font_system(FontSystem::new())
    }

    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self {
            font_system: Arc::new(Mutex::new(font_system)),
        }
    }
}

impl Default for CosmicMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for CosmicMeasure {
    fn measure(&self, text: &str, style: TextStyle, max_width: Option<f32>) -> Size {
        if text.is_empty() {
            return Vec2::ZERO;
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(style.size, self.line_height(style));
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if style.bold {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new().weight(weight);

        buffer.set_size(max_width, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let (mut width, mut height): (f32, f32) = (0.0, 0.0);
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += metrics.line_height;
        }
        vec2(width, height)
    }
}
