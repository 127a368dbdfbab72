//! Library to put scrambled image tiles back in order.
//!
//! An image is cut into equal, non-overlapping tiles numbered in
//! row-major order. An ordering lists, for every destination tile in
//! row-major order, the index of the scrambled tile that belongs there.
//! [rearrange] validates the ordering and copies each tile into place.
//!
//! * The tile size must divide both image dimensions.
//! * The ordering must use every tile exactly once.
//!
//! [scramble] does the opposite, so scrambled test images can be made
//! from any picture.

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
//

mod error;
mod grid;
pub mod io;
mod job;
pub mod ordering;
mod rearrange;
mod scramble;

pub use crate::error::Error;
pub use crate::grid::{Grid, TileSize};
pub use crate::job::{scramble_file, unscramble_file, Job, ScrambleJob};
pub use crate::ordering::{valid, validate};
#[doc(inline)]
pub use crate::rearrange::rearrange;
#[doc(inline)]
pub use crate::scramble::{random_ordering, scramble, seeded_rng};
