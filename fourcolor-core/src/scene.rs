use log::debug;

use crate::{
    analysis::coloring::ColorMap,
    color::Color,
    command::Command,
    figure::{Figure, FigureRef},
    geometry::point::Point,
    history::Snapshot,
    view::FigureView,
};

/// One shared figure, its colored views, and the focused view: the whole
/// editable configuration.
#[derive(Clone, Debug)]
pub struct Scene {
    figure: FigureRef,
    views: Vec<FigureView>,
    focused: usize,
}

impl Scene {
    /// Four views of one empty figure in the standard palette, spread three
    /// tiles apart.
    pub fn new() -> Scene {
        Scene::with_colors([Color::RED, Color::YELLOW, Color::GREEN, Color::BLUE])
    }

    pub fn with_colors(colors: impl IntoIterator<Item = Color>) -> Scene {
        let figure = Figure::new().shared();
        let views: Vec<FigureView> = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| {
                FigureView::new(figure.clone(), Point { x: 3 * i as i32, y: 0 }, color)
            })
            .collect();
        assert!(!views.is_empty(), "Scene must have at least one view");
        Scene {
            figure,
            views,
            focused: 0,
        }
    }

    /// The shared figure handle. Mutation goes through the figure's own
    /// `toggle`/`clear` API; no exclusive alias escapes.
    pub fn figure(&self) -> FigureRef {
        self.figure.clone()
    }

    pub fn views(&self) -> &[FigureView] {
        &self.views
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_view(&self) -> &FigureView {
        &self.views[self.focused]
    }

    pub fn focused_view_mut(&mut self) -> &mut FigureView {
        &mut self.views[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.views.len();
    }

    /// Apply `f` to every view.
    pub fn for_each_view(&mut self, f: impl FnMut(&mut FigureView)) {
        self.views.iter_mut().for_each(f);
    }

    /// Erase every tile and return each view to its initial placement.
    pub fn clear(&mut self) {
        self.figure.borrow_mut().clear();
        self.for_each_view(|view| {
            view.reset();
        });
    }

    pub fn apply(&mut self, command: Command) {
        debug!("apply {:?}", command);
        match command {
            Command::Toggle(p) => {
                self.focused_view_mut().toggle(p);
            }
            Command::Translate(dr) => {
                self.focused_view_mut().translate(dr);
            }
            Command::RotateCcw => {
                self.focused_view_mut().rotate_ccw();
            }
            Command::RotateCw => {
                self.focused_view_mut().rotate_cw();
            }
            Command::FlipX => {
                self.focused_view_mut().flip_x();
            }
            Command::FlipY => {
                self.focused_view_mut().flip_y();
            }
            Command::Reset => {
                self.focused_view_mut().reset();
            }
            Command::Focus => self.focus_next(),
            Command::Clear => self.clear(),
        }
    }

    pub fn tile_count(&self) -> usize {
        self.figure.borrow().len()
    }

    pub fn is_contiguous(&self) -> bool {
        self.figure.borrow().is_contiguous()
    }

    pub fn color_map(&self) -> ColorMap {
        ColorMap::from_views(&self.views)
    }

    pub fn visible_tile_count(&self) -> usize {
        self.color_map().visible_tile_count()
    }

    /// True when no view's tiles hide behind another view's.
    pub fn all_visible(&self) -> bool {
        self.visible_tile_count() == self.views.len() * self.tile_count()
    }

    pub fn needs_four_colors(&self) -> bool {
        self.color_map().needs_four_colors()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tiles: self.figure.borrow().tiles().clone(),
            views: self.views.iter().map(|view| view.state()).collect(),
            focused: self.focused,
        }
    }

    /// Restore a snapshot taken from this scene; view states pair up with
    /// views in order.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        *self.figure.borrow_mut() = Figure::from_tiles(snapshot.tiles.iter().copied());
        for (view, state) in self.views.iter_mut().zip(&snapshot.views) {
            view.restore(state);
        }
        self.focused = snapshot.focused.min(self.views.len() - 1);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}
