// Organized modules
pub mod analysis;
pub mod geometry;

pub mod color;
pub mod command;
pub mod error;
pub mod figure;
pub mod history;
pub mod scene;
pub mod view;

// Re-export key types for external use
pub use analysis::coloring::ColorMap;
pub use color::Color;
pub use command::Command;
pub use error::ParseError;
pub use figure::{Figure, FigureRef, Tile, TileSet};
pub use geometry::point::Point;
pub use geometry::symmetry::Symmetry;
pub use history::{History, Snapshot};
pub use scene::Scene;
pub use view::{FigureView, ViewState};
