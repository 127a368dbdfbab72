//! Main Program for Retile
//! Run with `--help` for more instruction

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::path::PathBuf;

use anyhow::Error;
use clap::{ArgAction, Parser, Subcommand};
use image::ImageFormat;
use log::LevelFilter;

use retile::{Job, ScrambleJob, TileSize};

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    /// Worker threads (defaults to one per core)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// More logging, repeat for even more
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Put scrambled tiles back in order
    Unscramble {
        /// Scrambled input file
        input: PathBuf,

        /// Tile size, as HxW or a single number
        #[arg(short = 't', long)]
        tile_size: TileSize,

        /// Ordering file, one tile index per line
        #[arg(short = 'r', long)]
        ordering: PathBuf,

        /// Output format (guessed from output file name by default)
        #[arg(long, value_parser = parse_format)]
        format: Option<ImageFormat>,

        /// Output file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Shuffle tiles randomly, writing the ordering that undoes it
    Scramble {
        /// Input file
        input: PathBuf,

        /// Tile size, as HxW or a single number
        #[arg(short = 't', long)]
        tile_size: TileSize,

        /// Random seed
        #[arg(long)]
        seed: Option<String>,

        /// Ordering output file
        #[arg(short = 'r', long)]
        ordering: PathBuf,

        /// Output format (guessed from output file name by default)
        #[arg(long, value_parser = parse_format)]
        format: Option<ImageFormat>,

        /// Output file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
}

fn parse_format(s: &str) -> Result<ImageFormat, retile::Error> {
    retile::io::parse_format(s)
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        })
        .parse_default_env()
        .init();

    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()?;
    }

    match args.command {
        Command::Unscramble {
            input,
            tile_size,
            ordering,
            format,
            output,
        } => retile::unscramble_file(&Job {
            input,
            tile: tile_size,
            ordering,
            output,
            format,
        })?,
        Command::Scramble {
            input,
            tile_size,
            seed,
            ordering,
            format,
            output,
        } => retile::scramble_file(&ScrambleJob {
            input,
            tile: tile_size,
            seed,
            output,
            ordering,
            format,
        })?,
    }

    Ok(())
}
