use std::rc::Rc;

use glam::{Vec2, Vec4, vec2};

use super::{Container, Element};
use crate::{
    layout::{Position, Size, v_box_padding},
    style::{Heading, TextStyle, Theme},
    text::TextContext,
};

/// A static, single-style run of text such as a heading.
#[derive(Clone)]
pub struct MarkupText {
    pub content: String,
    pub style: TextStyle,
    pub color: Vec4,
    ctx: TextContext,
    position: Position,
    size: Size,
}

impl MarkupText {
    pub fn new(ctx: &TextContext, content: impl Into<String>) -> Self {
        Self::styled(ctx, content, TextStyle::regular(ctx.em()))
    }

    pub fn styled(ctx: &TextContext, content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
            color: ctx.theme.foreground_color(),
            ctx: ctx.clone(),
            position: Vec2::ZERO,
            size: Vec2::ZERO,
        }
    }

    pub fn heading(ctx: &TextContext, level: Heading, content: impl Into<String>) -> Self {
        Self::styled(ctx, content, level.style(ctx.em()))
    }

    pub fn set_theme(&mut self, theme: Rc<Theme>) {
        self.ctx.theme = theme;
    }
}

impl Element for MarkupText {
    fn min_size(&self) -> Size {
        self.ctx.measure.measure(&self.content, self.style, None)
    }

    fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn refresh(&mut self) {
        self.color = self.ctx.theme.foreground_color();
    }
}

/// Body text that word-wraps to whatever width it is given.
///
/// Until it has a width its minimum size is the widest word on one line;
/// after a resize the minimum height grows to the wrapped line count.
#[derive(Clone)]
pub struct Paragraph {
    pub content: String,
    pub style: TextStyle,
    pub color: Vec4,
    ctx: TextContext,
    position: Position,
    size: Size,
}

impl Paragraph {
    pub fn new(ctx: &TextContext, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::regular(ctx.em()),
            color: ctx.theme.foreground_color(),
            ctx: ctx.clone(),
            position: Vec2::ZERO,
            size: Vec2::ZERO,
        }
    }

    fn widest_word(&self) -> f32 {
        self.content
            .split_whitespace()
            .map(|w| self.ctx.measure.measure(w, self.style, None).x)
            .fold(0.0, f32::max)
    }

    pub fn wrapped_size(&self) -> Size {
        self.ctx
            .measure
            .measure(&self.content, self.style, Some(self.size.x))
    }
}

impl Element for Paragraph {
    fn min_size(&self) -> Size {
        let line = self.ctx.measure.line_height(self.style);
        let height = if self.size.x > 0.0 {
            self.wrapped_size().y.max(line)
        } else {
            line
        };
        vec2(self.widest_word(), height)
    }

    fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn refresh(&mut self) {
        self.color = self.ctx.theme.foreground_color();
    }
}

pub fn h1(ctx: &TextContext, text: impl Into<String>) -> MarkupText {
    MarkupText::heading(ctx, Heading::H1, text)
}

pub fn h2(ctx: &TextContext, text: impl Into<String>) -> MarkupText {
    MarkupText::heading(ctx, Heading::H2, text)
}

pub fn h3(ctx: &TextContext, text: impl Into<String>) -> MarkupText {
    MarkupText::heading(ctx, Heading::H3, text)
}

pub fn h4(ctx: &TextContext, text: impl Into<String>) -> MarkupText {
    MarkupText::heading(ctx, Heading::H4, text)
}

pub fn h5(ctx: &TextContext, text: impl Into<String>) -> MarkupText {
    MarkupText::heading(ctx, Heading::H5, text)
}

pub fn h6(ctx: &TextContext, text: impl Into<String>) -> MarkupText {
    MarkupText::heading(ctx, Heading::H6, text)
}

pub fn p(ctx: &TextContext, text: impl Into<String>) -> Paragraph {
    Paragraph::new(ctx, text)
}

/// Vertical document flow: 1.5em side margins, 0.5em above, below and between.
pub fn markup_text_flow(ctx: &TextContext, objs: Vec<Box<dyn Element>>) -> Container {
    let em = ctx.em();
    v_box_padding(1.5 * em, 0.5 * em, 0.5 * em, objs)
}
