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

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Size of a single tile, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    pub height: usize,
    pub width: usize,
}

impl TileSize {
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    pub const fn square(size: usize) -> Self {
        Self::new(size, size)
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Parses `"HxW"` (height first) or a single number for square tiles.
impl FromStr for TileSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|e| format!("Invalid tile dimension {v:?}: {e}"))
        };

        match s.split_once(['x', 'X']) {
            Some((h, w)) => Ok(Self::new(parse(h)?, parse(w)?)),
            None => parse(s).map(Self::square),
        }
    }
}

/// Image partitioned into non-overlapping tiles, indexed in row-major order.
///
/// Tile `i` lives at grid position `(i / cols, i % cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub tile: TileSize,
}

impl Grid {
    /// Builds the grid for an image of `(height, width)` pixels.
    ///
    /// Returns [`None`] if the tile is empty or does not evenly divide the image.
    pub fn new((height, width): (usize, usize), tile: TileSize) -> Option<Self> {
        if tile.height == 0 || tile.width == 0 {
            return None;
        }
        if height % tile.height != 0 || width % tile.width != 0 {
            return None;
        }

        Some(Self {
            rows: height / tile.height,
            cols: width / tile.width,
            tile,
        })
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Pixel rows covered by grid row `row`.
    pub fn rows_of(&self, row: usize) -> Range<usize> {
        let r = row * self.tile.height;
        r..r + self.tile.height
    }

    /// Pixel columns covered by grid column `col`.
    pub fn cols_of(&self, col: usize) -> Range<usize> {
        let c = col * self.tile.width;
        c..c + self.tile.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_divides() {
        let g = Grid::new((6, 8), TileSize::new(3, 2)).unwrap();
        assert_eq!((g.rows, g.cols), (2, 4));
        assert_eq!(g.len(), 8);
        assert_eq!(g.position(5), (1, 1));
        assert_eq!(g.index(1, 1), 5);
        assert_eq!(g.rows_of(1), 3..6);
        assert_eq!(g.cols_of(3), 6..8);
    }

    #[test]
    fn grid_rejects() {
        assert_eq!(Grid::new((5, 4), TileSize::square(2)), None);
        assert_eq!(Grid::new((4, 5), TileSize::square(2)), None);
        assert_eq!(Grid::new((4, 4), TileSize::new(0, 2)), None);
    }

    #[test]
    fn tile_size_parse() {
        assert_eq!("16".parse::<TileSize>(), Ok(TileSize::square(16)));
        assert_eq!("32x64".parse::<TileSize>(), Ok(TileSize::new(32, 64)));
        assert_eq!(" 2 X 3".parse::<TileSize>(), Ok(TileSize::new(2, 3)));
        assert!("ax2".parse::<TileSize>().is_err());
        assert!("".parse::<TileSize>().is_err());
    }
}
