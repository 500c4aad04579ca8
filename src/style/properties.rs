/// Font size multipliers of the heading levels, relative to the body size.
const HEADING_SCALE: [f32; 6] = [2.0, 1.5, 1.17, 1.0, 0.83, 0.67];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub bold: bool,
    pub size: f32,
}

impl TextStyle {
    pub fn regular(size: f32) -> Self {
        Self { bold: false, size }
    }

    pub fn bold(size: f32) -> Self {
        Self { bold: true, size }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl Heading {
    pub fn scale(self) -> f32 {
        HEADING_SCALE[self as usize]
    }

    /// Headings are always bold.
    pub fn style(self, em: f32) -> TextStyle {
        TextStyle::bold(self.scale() * em)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_sizes() {
        let em = 14.0;
        assert_eq!(Heading::H1.style(em), TextStyle::bold(28.0));
        assert_eq!(Heading::H2.style(em).size, 21.0);
        assert_eq!(Heading::H4.style(em).size, 14.0);
        assert_eq!(Heading::H6.style(em).size, 0.67 * 14.0);
        assert!(Heading::H3.style(em).bold);
    }
}
