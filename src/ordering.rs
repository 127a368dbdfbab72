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

//! Tile orderings: validation, parsing and inversion.
//!
//! An ordering is read in row-major *destination* order:
//! `ordering[dest] = src` places scrambled tile `src` at grid cell `dest`.

use std::collections::HashSet;
use std::fs;
use std::num::{IntErrorKind, ParseIntError};
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::grid::{Grid, TileSize};

/// Checks that `ordering` rearranges an image of `image_size` cut into `tile` tiles.
///
/// Fails with [`Error::InvalidInput`] if the tile does not divide the image,
/// if the ordering length differs from the tile count, or if it repeats a value.
/// An ordering that passes those checks but names a missing tile fails
/// with [`Error::OutOfRange`].
pub fn validate(
    image_size: (usize, usize),
    tile: TileSize,
    ordering: &[i64],
) -> Result<Grid, Error> {
    let grid = Grid::new(image_size, tile).ok_or(Error::InvalidInput)?;
    let count = grid.len();

    if ordering.len() != count {
        debug!(
            "Ordering has {} entries, grid {}x{} has {count} tiles",
            ordering.len(),
            grid.rows,
            grid.cols,
        );
        return Err(Error::InvalidInput);
    }

    let mut seen = HashSet::with_capacity(count);
    if !ordering.iter().all(|v| seen.insert(*v)) {
        return Err(Error::InvalidInput);
    }

    if let Some(&value) = ordering
        .iter()
        .find(|&&v| usize::try_from(v).map_or(true, |v| v >= count))
    {
        return Err(Error::OutOfRange { value, count });
    }

    Ok(grid)
}

/// Predicate form of [`validate`].
pub fn valid(image_size: (usize, usize), tile: TileSize, ordering: &[i64]) -> bool {
    validate(image_size, tile, ordering).is_ok()
}

/// Inverse of a permutation, so that `inverse(p)[p[i]] == i`.
///
/// `ordering` must be a permutation of `0..ordering.len()`, as checked by [`validate`].
pub(crate) fn inverse(ordering: &[i64]) -> Vec<i64> {
    let mut ret = vec![0; ordering.len()];
    for (i, &v) in ordering.iter().enumerate() {
        ret[v as usize] = i as i64;
    }
    ret
}

/// Parses one integer per line.
///
/// Surrounding whitespace on each line is ignored, as are blank lines
/// at the start or end of the text. A blank line in between is an error.
/// Integers too large for `i64` saturate, so they fail validation as out of range.
pub fn parse_ordering(text: &str) -> Result<Vec<i64>, Error> {
    let lines: Vec<_> = text.lines().map(str::trim).enumerate().collect();
    let start = lines.iter().position(|(_, l)| !l.is_empty());
    let end = lines.iter().rposition(|(_, l)| !l.is_empty());
    let body = match (start, end) {
        (Some(s), Some(e)) => &lines[s..=e],
        _ => return Ok(Vec::new()),
    };

    body.iter()
        .map(|&(i, l)| {
            l.parse().or_else(|source: ParseIntError| match source.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(Error::Parse {
                    line: i + 1,
                    text: l.to_owned(),
                    source,
                }),
            })
        })
        .collect()
}

/// Reads and parses an ordering file.
pub fn read_ordering(path: impl AsRef<Path>) -> Result<Vec<i64>, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_ordering(&text)
}

/// Writes an ordering file readable by [`read_ordering`].
pub fn write_ordering(path: impl AsRef<Path>, ordering: &[i64]) -> Result<(), Error> {
    let path = path.as_ref();
    let text: String = ordering.iter().map(|v| format!("{v}\n")).collect();
    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}
