use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;

pub type Tile = Point<i32>;
pub type TileSet = BTreeSet<Tile>;

/// Shared handle to a [`Figure`] edited through several views.
pub type FigureRef = Rc<RefCell<Figure>>;

/// The set of tiles a user edits; the shared ground truth behind every view.
///
/// Mutation happens only through [`toggle`](Figure::toggle) and
/// [`clear`](Figure::clear). Contiguity is cached and recomputed on every
/// mutation, never served stale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    tiles: TileSet,
    contiguous: bool,
}

impl Figure {
    pub fn new() -> Figure {
        Figure {
            tiles: TileSet::new(),
            contiguous: true,
        }
    }

    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Figure {
        let tiles: TileSet = tiles.into_iter().collect();
        let contiguous = connected(&tiles);
        Figure { tiles, contiguous }
    }

    /// Wrap in the shared handle held by views.
    pub fn shared(self) -> FigureRef {
        Rc::new(RefCell::new(self))
    }

    pub fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True iff every tile is reachable from every other via shared edges.
    /// Empty and singleton figures are contiguous.
    pub fn is_contiguous(&self) -> bool {
        self.contiguous
    }

    /// Arithmetic mean of the tile coordinates; the origin for an empty
    /// figure.
    pub fn centroid(&self) -> Point<f64> {
        if self.tiles.is_empty() {
            return Point::default();
        }
        let mut c = Point::default();
        for tile in &self.tiles {
            c = c + Point::<f64>::from(*tile);
        }
        c / self.tiles.len() as f64
    }

    /// Insert `p` if absent, remove it if present.
    pub fn toggle(&mut self, p: Tile) {
        if !self.tiles.remove(&p) {
            self.tiles.insert(p);
        }
        self.contiguous = connected(&self.tiles);
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        self.contiguous = true;
    }
}

impl Default for Figure {
    fn default() -> Self {
        Figure::new()
    }
}

impl FromIterator<Tile> for Figure {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Figure {
        Figure::from_tiles(iter)
    }
}

/// Flood fill over the four edge neighbors, from the first tile: true iff
/// every tile is reached.
fn connected(tiles: &TileSet) -> bool {
    let Some(start) = tiles.iter().next() else {
        return true;
    };
    let mut found = TileSet::new();
    let mut pending = vec![*start];
    while let Some(p) = pending.pop() {
        if !tiles.contains(&p) || !found.insert(p) {
            continue;
        }
        pending.push(Point { x: p.x + 1, y: p.y });
        pending.push(Point { x: p.x - 1, y: p.y });
        pending.push(Point { x: p.x, y: p.y + 1 });
        pending.push(Point { x: p.x, y: p.y - 1 });
    }
    found.len() == tiles.len()
}
