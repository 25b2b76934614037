use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use maze_path::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let maze = match &args.input_path {
        Some(path) => maze_path::read_maze(path)?,
        None => maze_path::read_maze_from(io::stdin().lock())
            .context("Failed to read maze from standard input.")?,
    };
    let path = maze_path::shortest_path(&maze.grid, &maze.start, &maze.end)?;
    maze_path::write_path(&path, BufWriter::new(io::stdout().lock()))
        .context("Failed to write path to standard output.")?;

    Ok(())
}
