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

use log::debug;
use ndarray::prelude::*;
use ndarray::Slice;
use rayon::prelude::*;

use crate::error::Error;
use crate::grid::TileSize;
use crate::ordering::validate;

/// Puts scrambled tiles back where they belong.
///
/// Parameters:
/// * `arr` : Scrambled array view. The first 2 dimensions (rows, columns) are
///   cut into tiles, any further dimension (e.g. channels) moves along with them.
/// * `tile` : Tile size.
/// * `ordering` : Row-major destination order, `ordering[dest]` being the index
///   of the scrambled tile that belongs at cell `dest`.
///
/// Fails if the ordering is not a permutation of the tiles (see [`validate`]).
pub fn rearrange<A, D>(
    arr: ArrayView<'_, A, D>,
    tile: TileSize,
    ordering: &[i64],
) -> Result<Array<A, D>, Error>
where
    A: Clone + Send + Sync,
    D: Dimension,
{
    if arr.ndim() < 2 {
        return Err(Error::InvalidInput);
    }
    let shape = arr.shape();
    let grid = validate((shape[0], shape[1]), tile, ordering)?;
    debug!("Rearranging {}x{} grid of {tile} tiles", grid.rows, grid.cols);

    // Every cell gets overwritten, so the initial content does not matter.
    let mut out = arr.to_owned();
    if grid.is_empty() {
        return Ok(out);
    }

    let bands: Vec<_> = out.axis_chunks_iter_mut(Axis(0), tile.height).collect();
    let arr = &arr;
    bands.into_par_iter().enumerate().for_each(|(row, mut band)| {
        for col in 0..grid.cols {
            let (r, c) = grid.position(ordering[grid.index(row, col)] as usize);

            let mut src = arr.view();
            src.slice_axis_inplace(Axis(0), Slice::from(grid.rows_of(r)));
            src.slice_axis_inplace(Axis(1), Slice::from(grid.cols_of(c)));

            band.slice_axis_mut(Axis(1), Slice::from(grid.cols_of(col)))
                .assign(&src);
        }
    });

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(h: usize, w: usize, c: usize) -> Array3<u8> {
        Array3::from_shape_fn((h, w, c), |(y, x, z)| ((y * w + x) * c + z) as u8)
    }

    #[test]
    fn reverse_quadrants() {
        let arr = Array::from_shape_fn((4, 4, 1), |(r, c, _)| (r * 4 + c) as u8);
        let out = rearrange(arr.view(), TileSize::square(2), &[3, 2, 1, 0]).unwrap();

        let out = out.index_axis(Axis(2), 0);
        assert_eq!(out.slice(s![..2, ..2]), array![[10, 11], [14, 15]]);
        assert_eq!(out.slice(s![..2, 2..]), array![[8, 9], [12, 13]]);
        assert_eq!(out.slice(s![2.., ..2]), array![[2, 3], [6, 7]]);
        assert_eq!(out.slice(s![2.., 2..]), array![[0, 1], [4, 5]]);
    }

    #[test]
    fn identity() {
        let arr = ramp(6, 9, 3);
        let ordering: Vec<_> = (0..9).collect();
        let out = rearrange(arr.view(), TileSize::new(2, 3), &ordering).unwrap();
        assert_eq!(out, arr);
    }

    #[test]
    fn single_tile() {
        let arr = ramp(5, 7, 4);
        let out = rearrange(arr.view(), TileSize::new(5, 7), &[0]).unwrap();
        assert_eq!(out, arr);
    }

    #[test]
    fn non_square_tiles() {
        // 2x4 image, 1x2 tiles -> 2x2 grid
        let arr = array![[0, 1, 2, 3], [4, 5, 6, 7]];
        let out = rearrange(arr.view(), TileSize::new(1, 2), &[2, 0, 3, 1]).unwrap();
        assert_eq!(out, array![[4, 5, 0, 1], [6, 7, 2, 3]]);
    }

    #[test]
    fn channels_move_together() {
        let arr = ramp(2, 4, 2);
        let out = rearrange(arr.view(), TileSize::square(2), &[1, 0]).unwrap();
        assert_eq!(out.slice(s![.., ..2, ..]), arr.slice(s![.., 2.., ..]));
        assert_eq!(out.slice(s![.., 2.., ..]), arr.slice(s![.., ..2, ..]));
    }

    #[test]
    fn invalid() {
        let arr = ramp(4, 4, 1);
        for (tile, ordering) in [
            (TileSize::square(2), vec![0, 1, 2]),
            (TileSize::square(2), vec![0, 0, 1, 2]),
            (TileSize::square(3), vec![0]),
        ] {
            let e = rearrange(arr.view(), tile, &ordering).unwrap_err();
            assert!(matches!(e, Error::InvalidInput));
            assert_eq!(
                e.to_string(),
                "The tile size or ordering are not valid for the given image",
            );
        }
    }

    #[test]
    fn out_of_range() {
        let arr = ramp(4, 4, 1);
        let e = rearrange(arr.view(), TileSize::square(2), &[0, 1, 2, 4]).unwrap_err();
        assert!(matches!(e, Error::OutOfRange { value: 4, count: 4 }));
    }

    #[test]
    fn one_dimensional() {
        let arr = array![0u8, 1, 2, 3];
        assert!(matches!(
            rearrange(arr.view(), TileSize::square(1), &[0]),
            Err(Error::InvalidInput),
        ));
    }
}
