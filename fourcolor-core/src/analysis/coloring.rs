use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{
    color::Color,
    figure::TileSet,
    geometry::point::Point,
    view::FigureView,
};

/// Transformed tile positions grouped by color, built once per analysis
/// pass. Tiles of same-colored views merge into one set.
#[derive(Clone, Debug, Default)]
pub struct ColorMap(BTreeMap<Color, TileSet>);

impl ColorMap {
    pub fn from_views<'a>(views: impl IntoIterator<Item = &'a FigureView>) -> ColorMap {
        views
            .into_iter()
            .map(|view| (view.color(), view.tiles().into_iter().collect()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, color: &Color) -> Option<&TileSet> {
        self.0.get(color)
    }

    /// Number of distinct occupied grid positions across every color.
    ///
    /// Fewer visible tiles than the per-color sum means figures overlap.
    pub fn visible_tile_count(&self) -> usize {
        self.0.values().flatten().copied().collect::<TileSet>().len()
    }

    /// True iff there is at least one color and every pair of colors has
    /// some pair of tiles sharing an edge.
    ///
    /// A pairwise adjacency heuristic over the current placement, not a
    /// planar-coloring proof; a single non-empty color is vacuously true.
    pub fn needs_four_colors(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .values()
                .tuple_combinations()
                .all(|(a, b)| touches(a, b))
    }
}

impl FromIterator<(Color, TileSet)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (Color, TileSet)>>(iter: I) -> ColorMap {
        let mut map: BTreeMap<Color, TileSet> = BTreeMap::new();
        for (color, tiles) in iter {
            map.entry(color).or_default().extend(tiles);
        }
        ColorMap(map)
    }
}

/// True if some tile of `a` shares an edge with some tile of `b`.
fn touches(a: &TileSet, b: &TileSet) -> bool {
    a.iter().any(|tile| {
        b.contains(&Point { x: tile.x + 1, y: tile.y })
            || b.contains(&Point { x: tile.x - 1, y: tile.y })
            || b.contains(&Point { x: tile.x, y: tile.y + 1 })
            || b.contains(&Point { x: tile.x, y: tile.y - 1 })
    })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::figure::Figure;

    fn pts(ps: &[(i32, i32)]) -> TileSet {
        ps.iter().map(|&(x, y)| Point { x, y }).collect()
    }

    #[test]
    fn empty_map() {
        let map = ColorMap::default();
        assert_eq!(map.visible_tile_count(), 0);
        assert!(!map.needs_four_colors());
    }

    #[test]
    fn single_color_is_vacuously_true() {
        let map: ColorMap = [(Color::RED, pts(&[(0, 0)]))].into_iter().collect();
        assert!(map.needs_four_colors());
    }

    #[test]
    fn mutually_adjacent_quad() {
        // Bottom bar, wrap-around bar, and two single tiles pinched between
        // them; every pair of colors shares an edge somewhere.
        let map: ColorMap = [
            (Color::RED, pts(&[(0, 0), (1, 0), (2, 0)])),
            (Color::YELLOW, pts(&[(0, 1), (0, 2), (1, 2), (2, 2)])),
            (Color::GREEN, pts(&[(1, 1)])),
            (Color::BLUE, pts(&[(2, 1)])),
        ]
        .into_iter()
        .collect();
        assert!(map.needs_four_colors());
    }

    #[test]
    fn isolated_figure_fails() {
        let map: ColorMap = [
            (Color::RED, pts(&[(0, 0), (1, 0), (2, 0)])),
            (Color::YELLOW, pts(&[(0, 1), (0, 2), (1, 2), (2, 2)])),
            (Color::GREEN, pts(&[(1, 1)])),
            (Color::BLUE, pts(&[(5, 5)])),
        ]
        .into_iter()
        .collect();
        assert!(!map.needs_four_colors());
    }

    #[test]
    fn corner_contact_is_not_adjacency() {
        let map: ColorMap = [
            (Color::RED, pts(&[(0, 0)])),
            (Color::BLUE, pts(&[(1, 1)])),
        ]
        .into_iter()
        .collect();
        assert!(!map.needs_four_colors());
    }

    #[test]
    fn visible_count_detects_overlap() {
        let map: ColorMap = [
            (Color::RED, pts(&[(0, 0), (1, 0)])),
            (Color::BLUE, pts(&[(1, 0), (2, 0)])),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.visible_tile_count(), 3);
    }

    #[test]
    fn same_color_views_merge() {
        let figure = Figure::from_tiles([Point { x: 0, y: 0 }]).shared();
        let a = FigureView::new(figure.clone(), Point::default(), Color::RED);
        let mut b = FigureView::new(figure.clone(), Point::default(), Color::RED);
        b.translate(Point { x: 4, y: 0 });
        let map = ColorMap::from_views([&a, &b]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.visible_tile_count(), 2);
    }

    #[test]
    fn from_views_uses_transformed_positions() {
        let figure = Figure::from_tiles([Point { x: 0, y: 0 }]).shared();
        let a = FigureView::new(figure.clone(), Point { x: 0, y: 0 }, Color::RED);
        let b = FigureView::new(figure.clone(), Point { x: 1, y: 0 }, Color::BLUE);
        let map = ColorMap::from_views([&a, &b]);
        assert_eq!(map.visible_tile_count(), 2);
        assert!(map.needs_four_colors());
        assert_eq!(map.get(&Color::BLUE), Some(&pts(&[(1, 0)])));
    }
}
