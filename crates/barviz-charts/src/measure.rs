//! Text width estimation for tick labels

/// Strategy trait mapping a string to its rendered pixel width
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> f64;
}

/// Fixed average glyph width per character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharWidthMeasurer {
    pub char_width: f64,
}

impl CharWidthMeasurer {
    pub fn new(char_width: f64) -> Self {
        Self { char_width }
    }
}

impl Default for CharWidthMeasurer {
    fn default() -> Self {
        Self::new(7.0)
    }
}

impl TextMeasurer for CharWidthMeasurer {
    fn measure(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}

/// Host-supplied measurement (e.g. canvas `measureText`)
impl<F> TextMeasurer for F
where
    F: Fn(&str) -> f64,
{
    fn measure(&self, text: &str) -> f64 {
        self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_width() {
        let m = CharWidthMeasurer::new(6.0);
        assert_eq!(m.measure("-250"), 24.0);
        assert_eq!(m.measure(""), 0.0);
    }

    #[test]
    fn test_closure_measurer() {
        let m = |text: &str| text.len() as f64 * 2.0;
        assert_eq!(TextMeasurer::measure(&m, "100"), 6.0);
    }
}
