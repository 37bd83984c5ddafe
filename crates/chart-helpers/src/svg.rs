//! SVG attribute strings: transforms and path data

use std::fmt::Write;

/// `transform` value moving a group by `(x, y)`
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({}, {})", x, y)
}

/// `transform` value rotating by `degree` degrees
pub fn rotate(degree: f64) -> String {
    format!("rotate({})", degree)
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(64),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{},{}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{}", y);
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        assert_eq!(translate(40.0, 20.0), "translate(40, 20)");
        assert_eq!(translate(0.5, -3.25), "translate(0.5, -3.25)");
    }

    #[test]
    fn test_rotate() {
        assert_eq!(rotate(-45.0), "rotate(-45)");
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 6.0)
            .vertical_to(0.0)
            .horizontal_to(100.0)
            .vertical_to(6.0)
            .build();

        assert_eq!(path, "M0,6V0H100V6");
    }
}
