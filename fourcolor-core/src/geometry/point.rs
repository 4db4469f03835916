use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A two-dimensional grid point.
///
/// The derived ordering (x, then y) exists so points can live in ordered
/// sets; it has no geometric meaning.
#[derive(Debug, Copy, Clone, Default, From, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Display> Display for Point<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Point<i32>> for Point<f64> {
    fn from(p: Point<i32>) -> Self {
        Point { x: p.x as f64, y: p.y as f64 }
    }
}

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Point<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Point<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Point { x: -self.x, y: -self.y }
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Point<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self::Output {
        Point {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Integer division truncates toward zero, like the scalar operator.
impl<T: Div<Output = T> + Copy> Div<T> for Point<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self::Output {
        Point {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Point<f64> {
    /// Nearest integer point after scaling by `factor`. Halves round away
    /// from zero (`f64::round`).
    pub fn round_scaled(&self, factor: f64) -> Point<i32> {
        Point {
            x: (self.x * factor).round() as i32,
            y: (self.y * factor).round() as i32,
        }
    }

    /// Nearest integer point; halves round away from zero.
    pub fn round(&self) -> Point<i32> {
        self.round_scaled(1.0)
    }
}

impl FromStr for Point<i32> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParseError::InvalidPoint(s.to_string()))?;
        let coord = |text: &str| {
            text.trim()
                .parse()
                .map_err(|source| ParseError::InvalidCoordinate { text: text.to_string(), source })
        };
        Ok(Point { x: coord(x)?, y: coord(y)? })
    }
}
