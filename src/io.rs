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

//! Image codec boundary.
//!
//! Images are handled as raw bytes of shape `(height, width, bytes per pixel)`,
//! so any sample format the codec decodes passes through untouched.

use std::fs::{self, File};
use std::io::{BufReader, Cursor};
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{ColorType, DynamicImage, ImageError, ImageFormat};
use log::info;
use ndarray::prelude::*;

use crate::error::Error;

/// Reads an image, keeping its channels and sample depth as stored.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage, Error> {
    let path = path.as_ref();
    let decode = || -> Result<DynamicImage, ImageError> {
        let file = File::open(path).map_err(ImageError::IoError)?;
        let im = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(ImageError::IoError)?
            .decode()?;
        Ok(im)
    };

    let im = decode().map_err(|source| Error::Decode {
        path: path.to_owned(),
        source,
    })?;
    info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        im.width(),
        im.height(),
        im.color(),
    );
    Ok(im)
}

/// Views the pixel bytes of `im` as a `(height, width, bytes per pixel)` array.
pub fn pixel_view(im: &DynamicImage) -> Result<ArrayView3<'_, u8>, Error> {
    let channels = match im {
        DynamicImage::ImageLuma8(_) => 1,
        DynamicImage::ImageLumaA8(_) => 2,
        DynamicImage::ImageRgb8(_) => 3,
        DynamicImage::ImageRgba8(_) => 4,
        DynamicImage::ImageLuma16(_) => 2,
        DynamicImage::ImageLumaA16(_) => 4,
        DynamicImage::ImageRgb16(_) => 6,
        DynamicImage::ImageRgba16(_) => 8,
        DynamicImage::ImageRgb32F(_) => 12,
        DynamicImage::ImageRgba32F(_) => 16,
        _ => return Err(Error::UnsupportedColor(im.color())),
    };

    ArrayView3::from_shape(
        (im.height() as usize, im.width() as usize, channels),
        im.as_bytes(),
    )
    .map_err(|_| Error::UnsupportedColor(im.color()))
}

/// Writes raw pixel bytes.
///
/// Without an explicit `format` it is guessed from the file extension.
pub fn save_image(
    path: impl AsRef<Path>,
    arr: ArrayView3<'_, u8>,
    color: ColorType,
    format: Option<ImageFormat>,
) -> Result<(), Error> {
    let path = path.as_ref();
    let (height, width, _) = arr.dim();
    let buf = arr.as_standard_layout();
    let buf = buf.as_slice().unwrap_or_default();

    // Encode fully in memory, so a rejected buffer leaves no file behind.
    let encode = || -> Result<(), ImageError> {
        let format = match format {
            Some(format) => format,
            None => ImageFormat::from_path(path)?,
        };
        let mut data = Cursor::new(Vec::new());
        image::write_buffer_with_format(
            &mut data,
            buf,
            width as u32,
            height as u32,
            color,
            format,
        )?;
        fs::write(path, data.into_inner()).map_err(ImageError::IoError)
    };

    encode().map_err(|source| Error::Encode {
        path: path.to_owned(),
        source,
    })?;

    info!("Wrote {} ({width}x{height})", path.display());
    Ok(())
}

/// Looks up an image format by extension-like name (`png`, `tiff`, ...).
pub fn parse_format(name: &str) -> Result<ImageFormat, Error> {
    ImageFormat::from_extension(name.trim_start_matches('.'))
        .ok_or_else(|| Error::UnknownFormat(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage};

    #[test]
    fn view_shape() {
        let im = DynamicImage::ImageRgb8(RgbImage::from_fn(5, 3, |x, y| {
            Rgb([x as u8, y as u8, 7])
        }));
        let arr = pixel_view(&im).unwrap();
        assert_eq!(arr.dim(), (3, 5, 3));
        assert_eq!(arr[[2, 4, 0]], 4);
        assert_eq!(arr[[2, 4, 1]], 2);
        assert_eq!(arr[[2, 4, 2]], 7);
    }

    #[test]
    fn view_keeps_alpha() {
        let im = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(2, 2, LumaA([9, 200])));
        let arr = pixel_view(&im).unwrap();
        assert_eq!(arr.dim(), (2, 2, 2));
        assert_eq!(arr[[1, 1, 1]], 200);
    }

    #[test]
    fn formats() {
        assert_eq!(parse_format("png").unwrap(), ImageFormat::Png);
        assert_eq!(parse_format(".TIFF").unwrap(), ImageFormat::Tiff);
        assert!(matches!(
            parse_format("nope"),
            Err(Error::UnknownFormat(_)),
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            load_image("/nonexistent/retile/input.png"),
            Err(Error::Decode { .. }),
        ));
    }
}
