//! Color streams for chart series.
//!
//! Each stream draws its parameters once, then colors are a pure function of
//! the series index. Large hue steps keep neighbouring series apart.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const SAT_RANGE: f64 = 20.0;
const LIGHT_RANGE: f64 = 10.0;
const SAT_LIGHT_FLOOR: f64 = 50.0;

/// An HSL color; `hue` is unbounded and wraps when rendered by CSS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// CSS `hsl()` string
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Memoized per-stream parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamParams {
    pub base_hue: f64,
    pub hue_step: f64,
    pub base_saturation: f64,
    pub base_lightness: f64,
    pub sat_light_step: f64,
}

impl StreamParams {
    fn draw<R: Rng>(rng: &mut R) -> Self {
        Self {
            base_hue: rng.gen_range(0.0..360.0),
            hue_step: rng.gen_range(30.0..40.0),
            base_saturation: rng.gen_range(0.0..SAT_RANGE),
            base_lightness: rng.gen_range(0.0..LIGHT_RANGE),
            sat_light_step: rng.gen_range(3.0..8.0),
        }
    }

    pub fn color(&self, index: usize) -> Hsl {
        let i = index as f64;
        Hsl {
            hue: self.base_hue + i * self.hue_step,
            saturation: (self.base_saturation + i * self.sat_light_step) % SAT_RANGE
                + SAT_LIGHT_FLOOR,
            lightness: (self.base_lightness + i * self.sat_light_step) % LIGHT_RANGE
                + SAT_LIGHT_FLOOR,
        }
    }
}

/// Lazily-populated registry of color streams keyed by stream id.
#[derive(Debug)]
pub struct ColorStreams {
    rng: StdRng,
    streams: HashMap<u32, StreamParams>,
}

impl Default for ColorStreams {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorStreams {
    /// Streams drawn from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible streams: the same seed gives the same palette every run
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            streams: HashMap::new(),
        }
    }

    /// Parameters for `stream_id`, drawn on first use.
    pub fn params(&mut self, stream_id: u32) -> StreamParams {
        let rng = &mut self.rng;
        *self
            .streams
            .entry(stream_id)
            .or_insert_with(|| StreamParams::draw(rng))
    }

    pub fn color_for(&mut self, stream_id: u32, index: usize) -> Hsl {
        self.params(stream_id).color(index)
    }

    /// Number of streams drawn so far
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_arguments_same_color() {
        let mut colors = ColorStreams::new();
        let first = colors.color_for(4, 2);
        let _ = colors.color_for(9, 0);
        assert_eq!(colors.color_for(4, 2), first);
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn test_distinct_streams_get_distinct_params() {
        let mut colors = ColorStreams::seeded(7);
        assert_ne!(colors.params(0), colors.params(1));
    }

    #[test]
    fn test_params_stay_in_range() {
        let mut colors = ColorStreams::seeded(42);
        for id in 0..50 {
            let p = colors.params(id);
            assert!((0.0..360.0).contains(&p.base_hue));
            assert!((30.0..40.0).contains(&p.hue_step));
            assert!((0.0..20.0).contains(&p.base_saturation));
            assert!((0.0..10.0).contains(&p.base_lightness));
            assert!((3.0..8.0).contains(&p.sat_light_step));
        }
    }

    #[test]
    fn test_color_formula() {
        let p = StreamParams {
            base_hue: 350.0,
            hue_step: 35.0,
            base_saturation: 18.0,
            base_lightness: 9.0,
            sat_light_step: 4.0,
        };
        let c = p.color(2);
        // hue is not wrapped
        assert_eq!(c.hue, 420.0);
        assert_eq!(c.saturation, 56.0);
        assert_eq!(c.lightness, 57.0);
        assert_eq!(c.css(), "hsl(420, 56%, 57%)");
    }

    #[test]
    fn test_seeded_streams_reproduce() {
        let mut a = ColorStreams::seeded(3);
        let mut b = ColorStreams::seeded(3);
        assert_eq!(a.color_for(0, 5), b.color_for(0, 5));
    }
}
