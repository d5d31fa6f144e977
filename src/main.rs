use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use backtrack_maze::grids::{DEFAULT_CELL_SIZE, DEFAULT_DIMS};
use backtrack_maze::{Generator, Maze, WallStrictness};

mod renderer;
use renderer::TextRenderer;

/// Randomized depth-first maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cell columns
    #[arg(long, default_value_t = DEFAULT_DIMS.0)]
    width: usize,

    /// Cell rows
    #[arg(long, default_value_t = DEFAULT_DIMS.1)]
    height: usize,

    /// Size of one cell, scales the drawing
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: f32,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Step the generator and draw a frame per step
    #[arg(long)]
    animate: bool,

    /// Delay between animated frames
    #[arg(long, default_value_t = 30)]
    frame_ms: u64,

    /// Skip wall clears between non-adjacent cells instead of failing
    #[arg(long)]
    lenient: bool,
}

fn new_generator(args: &Args) -> Result<Box<dyn Generator>> {
    let strictness = if args.lenient {
        WallStrictness::Lenient
    } else {
        WallStrictness::Strict
    };

    let maze = match args.seed {
        Some(seed) => Maze::seeded(args.width, args.height, args.cell_size, seed),
        None => Maze::new(args.width, args.height, args.cell_size),
    }
    .context("could not set up maze")?;

    Ok(Box::new(maze.with_strictness(strictness)))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut maze_generator = new_generator(&args)?;
    let renderer = TextRenderer::for_grid(maze_generator.grid());

    if args.animate {
        let frame = Duration::from_millis(args.frame_ms);
        while !maze_generator.is_done() {
            maze_generator
                .step_generation()
                .context("maze generation step failed")?;
            let drawn = renderer.render(maze_generator.grid(), maze_generator.cursor());
            // clear screen, home cursor
            print!("\x1B[2J\x1B[H{}", drawn);
            thread::sleep(frame);
        }
    } else {
        maze_generator
            .generate_maze()
            .context("maze generation failed")?;
        print!("{}", renderer.render(maze_generator.grid(), None));
    }

    let grid = maze_generator.grid();
    info!(
        "{}x{} maze: {} steps, {} walls cleared",
        grid.dims.width,
        grid.dims.height,
        maze_generator.steps(),
        grid.cleared_walls()
    );

    Ok(())
}
