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

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use image::{ColorType, ImageError};
use thiserror::Error;

/// Everything that can go wrong while retiling an image.
#[derive(Debug, Error)]
pub enum Error {
    /// Tile size does not divide the image, or the ordering has the
    /// wrong length or repeated entries.
    #[error("The tile size or ordering are not valid for the given image")]
    InvalidInput,

    /// Ordering names a tile that does not exist.
    #[error("Ordering value {value} is outside the tile range 0..{count}")]
    OutOfRange { value: i64, count: usize },

    #[error("Failed to decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Failed to encode image {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// Non-integer line in an ordering file. `line` is 1-based.
    #[error("Line {line} of ordering is not an integer: {text:?}")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to access ordering file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported pixel layout {0:?}")]
    UnsupportedColor(ColorType),

    #[error("Unknown image format {0:?}")]
    UnknownFormat(String),
}
