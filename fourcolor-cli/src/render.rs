//! ASCII rendering of a whole scene: every view on one grid.

use std::collections::BTreeMap;

use fourcolor_core::{Color, Point, Scene, Tile};

/// One letter per view color; later views paint over earlier ones, like the
/// draw order on screen. A status line reports the three checks.
pub fn render_scene(scene: &Scene) -> String {
    let mut cells: BTreeMap<Tile, char> = BTreeMap::new();
    for view in scene.views() {
        let letter = color_letter(view.color());
        for tile in view.tiles() {
            cells.insert(tile, letter);
        }
    }

    let mut out = String::new();
    if cells.is_empty() {
        out.push_str("(empty)\n");
    } else {
        let x_min = cells.keys().map(|p| p.x).min().unwrap();
        let x_max = cells.keys().map(|p| p.x).max().unwrap();
        let y_min = cells.keys().map(|p| p.y).min().unwrap();
        let y_max = cells.keys().map(|p| p.y).max().unwrap();
        for y in (y_min..=y_max).rev() {
            for x in x_min..=x_max {
                out.push(cells.get(&Point { x, y }).copied().unwrap_or('.'));
                out.push(' ');
            }
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "contiguous: {}  visible: {}/{}  four-color: {}\n",
        scene.is_contiguous(),
        scene.visible_tile_count(),
        scene.views().len() * scene.tile_count(),
        scene.needs_four_colors(),
    ));
    out
}

fn color_letter(color: Color) -> char {
    if color == Color::RED {
        'r'
    } else if color == Color::YELLOW {
        'y'
    } else if color == Color::GREEN {
        'g'
    } else if color == Color::BLUE {
        'b'
    } else {
        '#'
    }
}
