use std::fmt::{self, Display, Formatter};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// An RGB color with components on the [0, 1] scale.
///
/// Components are `OrderedFloat` so colors are totally ordered and can key
/// the maps built during configuration analysis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: OrderedFloat<f64>,
    pub g: OrderedFloat<f64>,
    pub b: OrderedFloat<f64>,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.25);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const GREEN: Color = Color::new(0.15, 0.75, 0.15);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Color {
        Color {
            r: OrderedFloat(r),
            g: OrderedFloat(g),
            b: OrderedFloat(b),
        }
    }

    /// Component triple on the [0, 1] scale.
    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.r.0, self.g.0, self.b.0)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn palette_is_distinct_and_ordered() {
        let mut palette = [Color::RED, Color::YELLOW, Color::GREEN, Color::BLUE];
        palette.sort();
        for pair in palette.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn rgb_round_trip() {
        assert_eq!(Color::new(1.0, 0.0, 0.25).rgb(), (1.0, 0.0, 0.25));
    }
}
