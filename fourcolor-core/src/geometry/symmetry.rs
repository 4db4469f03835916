use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;

/// One of the eight symmetries of the square, as a 2x2 integer matrix.
///
/// Multiplication never leaves the group, and every member is orthogonal,
/// so the transpose is the inverse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    pub xx: i32,
    pub xy: i32,
    pub yx: i32,
    pub yy: i32,
}

impl Symmetry {
    pub const IDENTITY: Symmetry = Symmetry { xx: 1, xy: 0, yx: 0, yy: 1 };
    /// Quarter turn counterclockwise.
    pub const ROTATE_CCW: Symmetry = Symmetry { xx: 0, xy: -1, yx: 1, yy: 0 };
    /// Quarter turn clockwise.
    pub const ROTATE_CW: Symmetry = Symmetry { xx: 0, xy: 1, yx: -1, yy: 0 };
    /// Reflection about the x-axis.
    pub const FLIP_X: Symmetry = Symmetry { xx: 1, xy: 0, yx: 0, yy: -1 };
    /// Reflection about the y-axis.
    pub const FLIP_Y: Symmetry = Symmetry { xx: -1, xy: 0, yx: 0, yy: 1 };

    pub fn transpose(&self) -> Symmetry {
        Symmetry {
            xx: self.xx,
            xy: self.yx,
            yx: self.xy,
            yy: self.yy,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Symmetry::IDENTITY
    }
}

impl Default for Symmetry {
    fn default() -> Self {
        Symmetry::IDENTITY
    }
}

impl Mul for Symmetry {
    type Output = Symmetry;
    fn mul(self, rhs: Symmetry) -> Symmetry {
        Symmetry {
            xx: self.xx * rhs.xx + self.xy * rhs.yx,
            xy: self.xx * rhs.xy + self.xy * rhs.yy,
            yx: self.yx * rhs.xx + self.yy * rhs.yx,
            yy: self.yx * rhs.xy + self.yy * rhs.yy,
        }
    }
}

/// Apply the symmetry to a point, integer or real.
impl<T> Mul<Point<T>> for Symmetry
where
    T: Copy + Add<Output = T> + Mul<Output = T> + From<i32>,
{
    type Output = Point<T>;
    fn mul(self, p: Point<T>) -> Point<T> {
        Point {
            x: T::from(self.xx) * p.x + T::from(self.xy) * p.y,
            y: T::from(self.yx) * p.x + T::from(self.yy) * p.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn all_eight() -> Vec<Symmetry> {
        let quarter = Symmetry::ROTATE_CCW;
        let mut ms = vec![Symmetry::IDENTITY];
        for _ in 0..3 {
            let last = *ms.last().unwrap();
            ms.push(quarter * last);
        }
        let flipped: Vec<Symmetry> = ms.iter().map(|m| Symmetry::FLIP_X * *m).collect();
        ms.extend(flipped);
        ms
    }

    #[test]
    fn group_has_eight_distinct_elements() {
        let ms = all_eight();
        for (i, a) in ms.iter().enumerate() {
            for b in &ms[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn multiplication_stays_in_group() {
        let ms = all_eight();
        for a in &ms {
            for b in &ms {
                assert!(ms.contains(&(*a * *b)));
            }
        }
    }

    #[test]
    fn transpose_is_inverse() {
        for m in all_eight() {
            assert!((m * m.transpose()).is_identity());
            assert!((m.transpose() * m).is_identity());
        }
    }

    #[test]
    fn quarter_turns_cancel() {
        assert!((Symmetry::ROTATE_CCW * Symmetry::ROTATE_CW).is_identity());
        let full = Symmetry::ROTATE_CCW * Symmetry::ROTATE_CCW * Symmetry::ROTATE_CCW * Symmetry::ROTATE_CCW;
        assert!(full.is_identity());
    }

    #[test]
    fn maps_points() {
        let p = Point { x: 2, y: 1 };
        assert_eq!(Symmetry::IDENTITY * p, p);
        assert_eq!(Symmetry::ROTATE_CCW * p, Point { x: -1, y: 2 });
        assert_eq!(Symmetry::ROTATE_CW * p, Point { x: 1, y: -2 });
        assert_eq!(Symmetry::FLIP_X * p, Point { x: 2, y: -1 });
        assert_eq!(Symmetry::FLIP_Y * p, Point { x: -2, y: 1 });
    }

    #[test]
    fn maps_real_points() {
        let d = Point { x: -0.5, y: 0.0 };
        assert_eq!(Symmetry::ROTATE_CW * d, Point { x: 0.0, y: 0.5 });
    }
}
