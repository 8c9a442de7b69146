//! Candies and the factory that hands them out

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Range candy labels are drawn from
pub const LABEL_RANGE: RangeInclusive<u16> = 0..=1000;

/// An RGB color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A single candy in the dispenser. Immutable once made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candy {
    label: u16,
    color: Rgb,
}

impl Candy {
    /// Create a candy with an explicit label
    #[must_use]
    pub const fn new(label: u16, color: Rgb) -> Self {
        Self { label, color }
    }

    pub fn label(&self) -> u16 {
        self.label
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// Produces candies with random labels.
///
/// The factory owns its RNG so tests can seed it and get the same
/// candies on every run.
#[derive(Debug, Clone)]
pub struct CandyFactory<R = StdRng> {
    rng: R,
}

impl CandyFactory<StdRng> {
    /// Factory seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Factory with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CandyFactory<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Make a candy of the given color with a label from [`LABEL_RANGE`].
    /// Labels may repeat.
    pub fn create(&mut self, color: Rgb) -> Candy {
        let label = self.rng.gen_range(LABEL_RANGE);
        Candy::new(label, color)
    }

    /// Pick a color with every channel uniform over 0..=255
    pub fn random_color(&mut self) -> Rgb {
        Rgb::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}
