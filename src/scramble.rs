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

//! Producing scrambled images, the inverse of [`rearrange`].

use ndarray::prelude::*;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::grid::TileSize;
use crate::ordering::{inverse, validate};
use crate::rearrange::rearrange;

/// Random number generator seeded from the SHA-256 of `seed`,
/// or from system entropy if there is none.
pub fn seeded_rng(seed: Option<&str>) -> Xoshiro256StarStar {
    if let Some(seed) = seed {
        let mut hasher = Sha256::new();
        hasher.update(seed);

        Xoshiro256StarStar::from_seed(hasher.finalize().into())
    } else {
        Xoshiro256StarStar::from_entropy()
    }
}

/// Uniformly shuffled permutation of `0..count`.
pub fn random_ordering<R: Rng + ?Sized>(count: usize, random: &mut R) -> Vec<i64> {
    let mut ret: Vec<_> = (0..count as i64).collect();
    ret.shuffle(random);
    ret
}

/// Scrambles `arr` so that `rearrange(scrambled, tile, ordering)` gives back `arr`.
pub fn scramble<A, D>(
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
    validate((arr.shape()[0], arr.shape()[1]), tile, ordering)?;
    rearrange(arr, tile, &inverse(ordering))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Array3<u16> {
        Array3::from_shape_fn((12, 8, 3), |(y, x, c)| (y * 100 + x * 10 + c) as u16)
    }

    #[test]
    fn round_trip() {
        let arr = ramp();
        let tile = TileSize::new(3, 2);
        let mut random = seeded_rng(Some("round trip"));

        for _ in 0..8 {
            let ordering = random_ordering(16, &mut random);
            let scrambled = scramble(arr.view(), tile, &ordering).unwrap();
            let out = rearrange(scrambled.view(), tile, &ordering).unwrap();
            assert_eq!(out, arr);
        }
    }

    #[test]
    fn wrong_direction() {
        let arr = ramp();
        let tile = TileSize::square(4);
        // 3-cycle plus fixed points, not its own inverse
        let ordering = [1, 2, 0, 3, 4, 5];

        let scrambled = scramble(arr.view(), tile, &ordering).unwrap();
        assert_ne!(scrambled, arr);
        let out = rearrange(scrambled.view(), tile, &inverse(&ordering)).unwrap();
        assert_ne!(out, arr);
        let out = rearrange(scrambled.view(), tile, &ordering).unwrap();
        assert_eq!(out, arr);
    }

    #[test]
    fn seeded() {
        let a = random_ordering(64, &mut seeded_rng(Some("seed")));
        let b = random_ordering(64, &mut seeded_rng(Some("seed")));
        let c = random_ordering(64, &mut seeded_rng(Some("other")));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn invalid() {
        let arr = ramp();
        assert!(matches!(
            scramble(arr.view(), TileSize::square(5), &[0]),
            Err(Error::InvalidInput),
        ));
        assert!(matches!(
            scramble(arr.view(), TileSize::new(12, 8), &[1]),
            Err(Error::OutOfRange { value: 1, count: 1 }),
        ));
    }
}
