// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs;
use std::path::PathBuf;

use image::ImageFormat;
use log::info;

use crate::error::Error;
use crate::grid::{Grid, TileSize};
use crate::io::{load_image, pixel_view, save_image};
use crate::ordering::{read_ordering, write_ordering};
use crate::rearrange::rearrange;
use crate::scramble::{random_ordering, scramble, seeded_rng};

/// Unscramble one image file.
#[derive(Debug, Clone)]
pub struct Job {
    /// Scrambled input image.
    pub input: PathBuf,
    pub tile: TileSize,
    /// Ordering file, one tile index per line.
    pub ordering: PathBuf,
    pub output: PathBuf,
    /// Output format, guessed from `output` if missing.
    pub format: Option<ImageFormat>,
}

/// Scramble one image file, writing its ordering alongside.
#[derive(Debug, Clone)]
pub struct ScrambleJob {
    pub input: PathBuf,
    pub tile: TileSize,
    /// Random seed. System entropy is used without one.
    pub seed: Option<String>,
    pub output: PathBuf,
    /// Where the ordering that undoes the scramble is written.
    pub ordering: PathBuf,
    pub format: Option<ImageFormat>,
}

/// Loads the ordering and image, rearranges, then writes the result.
///
/// Nothing is written unless rearranging succeeds.
pub fn unscramble_file(job: &Job) -> Result<(), Error> {
    let ordering = read_ordering(&job.ordering)?;
    info!(
        "Read {} tile indices from {}",
        ordering.len(),
        job.ordering.display(),
    );

    let im = load_image(&job.input)?;
    let out = rearrange(pixel_view(&im)?, job.tile, &ordering)?;

    save_image(&job.output, out.view(), im.color(), job.format)
}

/// Scrambles an image with a random ordering.
///
/// Running [`unscramble_file`] on the outputs gives back the input image.
pub fn scramble_file(job: &ScrambleJob) -> Result<(), Error> {
    let im = load_image(&job.input)?;
    let grid = Grid::new((im.height() as usize, im.width() as usize), job.tile)
        .ok_or(Error::InvalidInput)?;

    let mut random = seeded_rng(job.seed.as_deref());
    let ordering = random_ordering(grid.len(), &mut random);
    let out = scramble(pixel_view(&im)?, job.tile, &ordering)?;

    write_ordering(&job.ordering, &ordering)?;
    if let Err(e) = save_image(&job.output, out.view(), im.color(), job.format) {
        let _ = fs::remove_file(&job.ordering);
        return Err(e);
    }
    info!(
        "Wrote {} tile indices to {}",
        ordering.len(),
        job.ordering.display(),
    );
    Ok(())
}
