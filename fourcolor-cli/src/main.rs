//! Command-line driver for the four-color grid toy.
//!
//! Provides:
//! - Scene rendering and status checks from a command script
//! - Machine-readable snapshot dumps
//! - Seeded random contiguous figure generation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use fourcolor_core::{Color, Command, Figure, FigureView, Point, Scene, Tile};

mod render;

#[derive(Parser)]
#[command(name = "fourcolor")]
#[command(about = "Four-color theorem grid toy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a scene from tiles and a command script, render it, and report
    /// the status checks
    Show {
        /// Figure tiles, as space-separated "x,y" pairs
        #[arg(short, long)]
        tiles: String,

        /// Commands applied in order before rendering, e.g. "cw focus left flip-x"
        #[arg(short, long, default_value = "")]
        commands: String,

        /// Dump the final scene snapshot as JSON instead of ASCII
        #[arg(long)]
        json: bool,
    },

    /// Generate a random contiguous figure
    Random {
        /// Number of tiles
        #[arg(short = 'n', long, default_value = "8")]
        tiles: usize,

        /// RNG seed; random when omitted
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { tiles, commands, json } => show(&tiles, &commands, json),
        Commands::Random { tiles, seed } => random(tiles, seed),
    }
}

fn show(tiles: &str, commands: &str, json: bool) -> Result<()> {
    let mut scene = Scene::new();
    let figure = scene.figure();
    for word in tiles.split_whitespace() {
        let tile: Tile = word.parse().with_context(|| format!("tile {:?}", word))?;
        figure.borrow_mut().toggle(tile);
    }
    debug!("figure has {} tiles", scene.tile_count());
    for word in commands.split_whitespace() {
        let command: Command = word.parse().with_context(|| format!("command {:?}", word))?;
        scene.apply(command);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&scene.snapshot())?);
    } else {
        print!("{}", render::render_scene(&scene));
    }
    Ok(())
}

fn random(tiles: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let figure = random_figure(tiles, &mut rng);
    let view = FigureView::new(figure.shared(), Point::default(), Color::BLACK);
    print!("{}", view);
    println!("seed: {}", seed);
    Ok(())
}

/// Grow a contiguous figure by repeatedly filling a random free neighbor of
/// a random tile.
fn random_figure(tiles: usize, rng: &mut StdRng) -> Figure {
    let mut figure = Figure::new();
    if tiles == 0 {
        return figure;
    }
    figure.toggle(Point { x: 0, y: 0 });
    while figure.len() < tiles {
        let current: Vec<Tile> = figure.tiles().iter().copied().collect();
        let base = current[rng.gen_range(0..current.len())];
        let (dx, dy) = [(1, 0), (-1, 0), (0, 1), (0, -1)][rng.gen_range(0..4)];
        let next = Point { x: base.x + dx, y: base.y + dy };
        if !figure.tiles().contains(&next) {
            figure.toggle(next);
        }
    }
    figure
}
