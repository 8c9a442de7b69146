//! Spring motion model
//!
//! The spring under the candy column is a single scalar: its current
//! extension. Pushing a candy compresses it by one step, popping lets it
//! extend by one step.
//!
//! The two bounds are enforced differently. Compressing past the minimum is
//! refused outright and leaves the spring where it was, while extending past
//! the maximum snaps the spring to exactly the maximum.

use tracing::trace;

use crate::config::SpringConfig;

/// Which way to move the spring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Extend (a candy was taken out)
    Grow,
    /// Compress (a candy was put in)
    Shrink,
}

/// Spring extension state
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    extension: f32,
    min_extension: f32,
    max_extension: f32,
    step: f32,
}

impl Spring {
    /// A fully extended spring
    pub fn new(config: &SpringConfig) -> Self {
        Self {
            extension: config.max_extension,
            min_extension: config.min_extension,
            max_extension: config.max_extension,
            step: config.step(),
        }
    }

    /// Move the spring one step. Returns whether the extension changed:
    /// `false` for a compression refused at the hard stop, and for a grow
    /// that starts at the maximum.
    pub fn adjust(&mut self, direction: Adjustment) -> bool {
        let before = self.extension;
        match direction {
            Adjustment::Shrink => {
                let next = self.extension - self.step;
                if next < self.min_extension {
                    trace!(extension = self.extension, "spring at hard stop");
                    return false;
                }
                self.extension = next;
            }
            Adjustment::Grow => {
                let next = self.extension + self.step;
                self.extension = if next > self.max_extension {
                    self.max_extension
                } else {
                    next
                };
            }
        }
        trace!(?direction, before, after = self.extension, "spring adjusted");
        self.extension != before
    }

    /// Current extension, used only for drawing
    pub fn position(&self) -> f32 {
        self.extension
    }

    pub fn extension(&self) -> f32 {
        self.extension
    }

    /// How far the top of the spring sits below its resting position
    pub fn compression(&self) -> f32 {
        self.max_extension - self.extension
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Return to full extension
    pub fn reset(&mut self) {
        self.extension = self.max_extension;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spring() -> Spring {
        Spring::new(&SpringConfig::default())
    }

    #[test]
    fn test_starts_at_max() {
        let spring = spring();
        assert_eq!(spring.position(), 300.0);
        assert_eq!(spring.compression(), 0.0);
        assert_eq!(spring.step(), 12.5);
    }

    #[test]
    fn test_shrink_by_exact_step() {
        let mut spring = spring();
        assert!(spring.adjust(Adjustment::Shrink));
        assert_eq!(spring.extension(), 287.5);
        assert_eq!(spring.compression(), 12.5);
    }

    #[test]
    fn test_shrink_rejected_below_min() {
        let mut spring = spring();
        // 300 - 22 * 12.5 = 25, which is exactly the minimum and allowed
        for _ in 0..22 {
            assert!(spring.adjust(Adjustment::Shrink));
        }
        assert_eq!(spring.extension(), 25.0);

        assert!(!spring.adjust(Adjustment::Shrink));
        assert_eq!(spring.extension(), 25.0);
    }

    #[test]
    fn test_grow_by_exact_step() {
        let mut spring = spring();
        spring.adjust(Adjustment::Shrink);
        spring.adjust(Adjustment::Shrink);
        assert!(spring.adjust(Adjustment::Grow));
        assert_eq!(spring.extension(), 287.5);
    }

    #[test]
    fn test_grow_at_max_reports_no_change() {
        let mut spring = spring();
        assert!(!spring.adjust(Adjustment::Grow));
        assert_eq!(spring.extension(), 300.0);
    }

    #[test]
    fn test_grow_stops_at_max_with_custom_step() {
        let config = SpringConfig {
            max_extension: 100.0,
            min_extension: 10.0,
            spring_constant: 1.0,
            candy_force: 30.0,
            ..SpringConfig::default()
        };
        let mut spring = Spring::new(&config);
        spring.adjust(Adjustment::Shrink);
        spring.adjust(Adjustment::Shrink);
        spring.adjust(Adjustment::Shrink);
        assert_eq!(spring.extension(), 10.0);
        // A shrink from 10 would land at -20
        assert!(!spring.adjust(Adjustment::Shrink));
        assert_eq!(spring.extension(), 10.0);

        spring.adjust(Adjustment::Grow);
        spring.adjust(Adjustment::Grow);
        spring.adjust(Adjustment::Grow);
        assert_eq!(spring.extension(), 100.0);
        assert!(!spring.adjust(Adjustment::Grow));
        assert_eq!(spring.extension(), 100.0);
    }

    #[test]
    fn test_reset() {
        let mut spring = spring();
        spring.adjust(Adjustment::Shrink);
        spring.reset();
        assert_eq!(spring.extension(), 300.0);
    }
}
