use std::fmt::{self, Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    figure::{FigureRef, Tile},
    geometry::{point::Point, symmetry::Symmetry},
};

/// A colored, independently transformed projection of one shared figure.
///
/// The view stores no tiles of its own: every query re-derives the output
/// from the live figure. Rotations and reflections pivot about the figure's
/// centroid, so transforming a shape turns it in place instead of swinging
/// it around the grid origin. Edits made through the view are mapped back
/// to figure coordinates by the inverse transform.
#[derive(Clone, Debug)]
pub struct FigureView {
    figure: FigureRef,
    init_offset: Point<f64>,
    offset: Point<f64>,
    transform: Symmetry,
    color: Color,
}

/// A view's transform state, captured for undo history.
///
/// The offset is real-valued: centroid compensation can leave it on a
/// half-integer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub offset: Point<f64>,
    pub transform: Symmetry,
}

impl FigureView {
    pub fn new(figure: FigureRef, offset: Point<i32>, color: Color) -> FigureView {
        let init_offset = Point::<f64>::from(offset);
        FigureView {
            figure,
            init_offset,
            offset: init_offset,
            transform: Symmetry::IDENTITY,
            color,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            offset: self.offset,
            transform: self.transform,
        }
    }

    pub fn restore(&mut self, state: &ViewState) {
        self.offset = state.offset;
        self.transform = state.transform;
    }

    /// The figure's tiles as seen through this view's transform and offset.
    ///
    /// Never mutates the figure. With the identity transform and a zero
    /// offset this reproduces the figure's own tiles exactly.
    pub fn tiles(&self) -> Vec<Tile> {
        let figure = self.figure.borrow();
        if figure.is_empty() {
            return vec![];
        }
        // The pivot may sit on a tile corner, at half-integer coordinates.
        // Double the figure so the pivot lands on integers, transform, then
        // halve.
        let mut pivot = figure.centroid().round_scaled(2.0);
        let mut tiles: Vec<Tile> = figure
            .tiles()
            .iter()
            .map(|&tile| self.transform * (tile * 2 - pivot))
            .collect();
        // A quarter turn can leave the doubled tiles on odd coordinates.
        // They all share one parity per axis, so nudging the pivot until the
        // first tile comes back even makes the halving exact for every tile.
        if (tiles[0].x + pivot.x) % 2 != 0 {
            pivot.x -= 1;
        }
        if (tiles[0].y + pivot.y) % 2 != 0 {
            pivot.y -= 1;
        }
        let dr = self.offset.round();
        for tile in &mut tiles {
            *tile = (*tile + pivot) / 2 + dr;
        }
        tiles
    }

    /// Toggle the figure tile that this view displays at `p`.
    ///
    /// The click is pushed back through the inverse of the display pipeline;
    /// the transpose inverts the matrix since every symmetry is orthogonal.
    /// Toggling moves the shared centroid, so the centroid delta, as seen
    /// through this view's transform, is folded into the offset: sibling
    /// views recompute from the new centroid and their tiles stay put.
    pub fn toggle(&mut self, p: Tile) -> &mut Self {
        let before = self.figure.borrow().centroid();
        let pivot = before.round_scaled(2.0);
        // Compensation can leave the offset on a half-integer; scale by just
        // under one so those ties round toward zero on the way back in.
        let dr = self.offset.round_scaled(0.9999);
        let q = (self.transform.transpose() * ((p - dr) * 2 - pivot) + pivot) / 2;
        debug!("toggle {} -> {}", p, q);
        self.figure.borrow_mut().toggle(q);

        let delta = self.figure.borrow().centroid() - before;
        self.offset = self.offset + (self.transform * delta - delta);
        self
    }

    pub fn translate(&mut self, dr: Point<i32>) -> &mut Self {
        self.offset = self.offset + Point::<f64>::from(dr);
        self
    }

    pub fn flip_x(&mut self) -> &mut Self {
        self.transform = Symmetry::FLIP_X * self.transform;
        self
    }

    pub fn flip_y(&mut self) -> &mut Self {
        self.transform = Symmetry::FLIP_Y * self.transform;
        self
    }

    pub fn rotate_ccw(&mut self) -> &mut Self {
        self.transform = Symmetry::ROTATE_CCW * self.transform;
        self
    }

    pub fn rotate_cw(&mut self) -> &mut Self {
        self.transform = Symmetry::ROTATE_CW * self.transform;
        self
    }

    /// Restore the initial offset and the identity transform. The figure is
    /// untouched.
    pub fn reset(&mut self) -> &mut Self {
        self.offset = self.init_offset;
        self.transform = Symmetry::IDENTITY;
        self
    }
}

/// ASCII picture of the transformed figure, top row first, with the
/// coordinates of the lower-left slot on the final line.
impl Display for FigureView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut tiles = self.tiles();
        if tiles.is_empty() {
            return writeln!(f, "(empty)");
        }
        // Raster order: left to right, top to bottom.
        tiles.sort_by(|a, b| b.y.cmp(&a.y).then(a.x.cmp(&b.x)));
        let x_min = tiles.iter().map(|p| p.x).min().unwrap();
        let x_max = tiles.iter().map(|p| p.x).max().unwrap();
        let y_top = tiles[0].y;
        let y_bottom = tiles[tiles.len() - 1].y;
        let mut next = tiles.iter().peekable();
        for y in (y_bottom..=y_top).rev() {
            for x in x_min..=x_max {
                let here = Point { x, y };
                if next.peek() == Some(&&here) {
                    next.next();
                    write!(f, "# ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{},{}", x_min, y_bottom)
    }
}
