/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Conversion catalog selected by an enumerated format tag.
use crate::channel_extract::ExtractChannelKernel;
use crate::grid::{dispatch, ConversionKernel, Grid};
use crate::image_copy::CopyImageKernel;
use crate::images::{
    Image, ImageMut, ImageSample, PackedRgbBuffer, PackedYuv422Buffer, Yuv420Buffer,
    Yuv422Buffer, YuvPlanarImage,
};
use crate::rgb_to_rgba::PackedRgbKernel;
use crate::rgb_to_y::RgbToGreyKernel;
use crate::yuv_error::check_destination_extent;
use crate::yuv_support::PackedRgbOrder;
use crate::yuv_to_rgba::{Yuv420BufferKernel, Yuv420PlanarKernel, Yuv422BufferKernel};
use crate::yuy2_to_rgb::PackedYuv422Kernel;
use crate::YuvError;
use tracing::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Format tag of every supported conversion
pub enum ConversionKind {
    CopyImage,
    RgbToGrey,
    ExtractChannel,
    Yuv420Buffer,
    Yuv420Planar,
    Yuv422Buffer,
    PackedYuv422,
    PackedRgb,
    PackedBgr,
}

impl ConversionKind {
    /// Horizontally adjacent output pixels produced by one work item.
    pub const fn pixels_per_item(&self) -> u32 {
        match self {
            ConversionKind::PackedYuv422 => 2,
            ConversionKind::PackedRgb | ConversionKind::PackedBgr => 4,
            _ => 1,
        }
    }

    /// Grid covering a destination of the given size.
    pub const fn grid_for(&self, width: u32, height: u32) -> Grid {
        Grid::covering(width, height, self.pixels_per_item())
    }
}

#[derive(Debug, Clone)]
/// Conversion source together with its operation parameters
pub enum Conversion<'a, S: ImageSample = u8> {
    CopyImage(Image<'a, S>),
    RgbToGrey(Image<'a, S>),
    ExtractChannel { src: Image<'a, S>, channel: i32 },
    Yuv420Buffer(Yuv420Buffer<'a>),
    Yuv420Planar(YuvPlanarImage<'a, u8>),
    Yuv422Buffer(Yuv422Buffer<'a>),
    PackedYuv422(PackedYuv422Buffer<'a>),
    PackedRgb(PackedRgbBuffer<'a>),
    PackedBgr(PackedRgbBuffer<'a>),
}

impl<S: ImageSample> Conversion<'_, S> {
    pub const fn kind(&self) -> ConversionKind {
        match self {
            Conversion::CopyImage(_) => ConversionKind::CopyImage,
            Conversion::RgbToGrey(_) => ConversionKind::RgbToGrey,
            Conversion::ExtractChannel { .. } => ConversionKind::ExtractChannel,
            Conversion::Yuv420Buffer(_) => ConversionKind::Yuv420Buffer,
            Conversion::Yuv420Planar(_) => ConversionKind::Yuv420Planar,
            Conversion::Yuv422Buffer(_) => ConversionKind::Yuv422Buffer,
            Conversion::PackedYuv422(_) => ConversionKind::PackedYuv422,
            Conversion::PackedRgb(_) => ConversionKind::PackedRgb,
            Conversion::PackedBgr(_) => ConversionKind::PackedBgr,
        }
    }

    /// Validates source store against its declared layout
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        match self {
            Conversion::CopyImage(src)
            | Conversion::RgbToGrey(src)
            | Conversion::ExtractChannel { src, .. } => src.check_constraints(),
            Conversion::Yuv420Buffer(src) => src.check_constraints(),
            Conversion::Yuv420Planar(src) => src.check_constraints(),
            Conversion::Yuv422Buffer(src) => src.check_constraints(),
            Conversion::PackedYuv422(src) => src.check_constraints(),
            Conversion::PackedRgb(src) | Conversion::PackedBgr(src) => src.check_constraints(),
        }
    }

    /// Extent of a frame source, image sources are clamped on read and have none.
    pub const fn frame_extent(&self) -> Option<(u32, u32)> {
        match self {
            Conversion::CopyImage(_)
            | Conversion::RgbToGrey(_)
            | Conversion::ExtractChannel { .. } => None,
            Conversion::Yuv420Buffer(src) => Some((src.width, src.height)),
            Conversion::Yuv420Planar(src) => Some((src.width, src.height)),
            Conversion::Yuv422Buffer(src) => Some((src.width, src.height)),
            Conversion::PackedYuv422(src) => Some((src.width, src.height)),
            Conversion::PackedRgb(src) | Conversion::PackedBgr(src) => {
                Some((src.width, src.height))
            }
        }
    }
}

/// Runs conversion over the grid covering the destination.
pub fn convert<S: ImageSample, D: ImageSample>(
    conversion: &Conversion<S>,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    let grid = conversion.kind().grid_for(dst.width, dst.height);
    convert_with_grid(conversion, grid, dst)
}

/// Runs conversion over an explicit grid.
///
/// Work items outside of the destination do nothing, destination pixels not
/// covered by the grid keep their content.
pub fn convert_with_grid<S: ImageSample, D: ImageSample>(
    conversion: &Conversion<S>,
    grid: Grid,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    if let Err(err) = conversion.check_constraints() {
        debug!(kind = ?conversion.kind(), %err, "conversion source rejected");
        return Err(err);
    }
    if let Some((width, height)) = conversion.frame_extent() {
        if let Err(err) = check_destination_extent(width, height, dst.width, dst.height) {
            debug!(kind = ?conversion.kind(), %err, "destination exceeds source frame");
            return Err(err);
        }
    }
    match conversion {
        Conversion::CopyImage(src) => run(&CopyImageKernel::new(src), grid, dst),
        Conversion::RgbToGrey(src) => run(&RgbToGreyKernel::new(src), grid, dst),
        Conversion::ExtractChannel { src, channel } => {
            run(&ExtractChannelKernel::new(src, *channel), grid, dst)
        }
        Conversion::Yuv420Buffer(src) => run(&Yuv420BufferKernel::new(src), grid, dst),
        Conversion::Yuv420Planar(src) => run(&Yuv420PlanarKernel::new(src), grid, dst),
        Conversion::Yuv422Buffer(src) => run(&Yuv422BufferKernel::new(src), grid, dst),
        Conversion::PackedYuv422(src) => run(&PackedYuv422Kernel::new(src), grid, dst),
        Conversion::PackedRgb(src) => run(
            &PackedRgbKernel::<{ PackedRgbOrder::Rgb as u8 }>::new(src),
            grid,
            dst,
        ),
        Conversion::PackedBgr(src) => run(
            &PackedRgbKernel::<{ PackedRgbOrder::Bgr as u8 }>::new(src),
            grid,
            dst,
        ),
    }
}

#[inline]
fn run<D: ImageSample, K: ConversionKernel<D>>(
    kernel: &K,
    grid: Grid,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    if let Err(err) = dispatch(kernel, grid, dst) {
        debug!(kernel = K::NAME, %err, "conversion destination rejected");
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yuv_support::ChannelOrder;
    use crate::{packed_yuv422_to_rgba, yuv420_buffer_to_rgba};
    use rand::Rng;

    #[test]
    fn test_pixels_per_item() {
        assert_eq!(ConversionKind::Yuv420Planar.grid_for(7, 5), Grid::new(7, 5));
        assert_eq!(ConversionKind::PackedYuv422.grid_for(7, 5), Grid::new(4, 5));
        assert_eq!(ConversionKind::PackedBgr.grid_for(7, 5), Grid::new(2, 5));
    }

    #[test]
    fn test_tag_matches_direct_call() {
        let mut rng = rand::rng();
        let frame: Vec<u8> = (0..Yuv420Buffer::min_len(8, 6))
            .map(|_| rng.random())
            .collect();
        let src = Yuv420Buffer {
            data: &frame,
            width: 8,
            height: 6,
        };
        let mut direct = ImageMut::<u8>::alloc(8, 6, ChannelOrder::Rgba);
        let mut tagged = ImageMut::<u8>::alloc(8, 6, ChannelOrder::Rgba);
        yuv420_buffer_to_rgba(&src, &mut direct).unwrap();
        let conversion: Conversion = Conversion::Yuv420Buffer(src);
        assert_eq!(conversion.kind(), ConversionKind::Yuv420Buffer);
        convert(&conversion, &mut tagged).unwrap();
        assert_eq!(direct.data.borrow(), tagged.data.borrow());

        let packed: Vec<u8> = (0..8 * 6 * 2).map(|_| rng.random()).collect();
        let src = PackedYuv422Buffer {
            data: &packed,
            stride: 16,
            width: 8,
            height: 6,
        };
        packed_yuv422_to_rgba(&src, &mut direct).unwrap();
        convert(&Conversion::<u8>::PackedYuv422(src), &mut tagged).unwrap();
        assert_eq!(direct.data.borrow(), tagged.data.borrow());
    }

    #[test]
    fn test_single_pixel_destination_under_wide_grid() {
        let source = [10u8, 20, 30, 40];
        let image = Image {
            data: &source,
            stride: 4,
            width: 1,
            height: 1,
            order: ChannelOrder::Rgba,
        };
        let frame = vec![235u8; Yuv420Buffer::min_len(4, 4)];
        let packed = vec![128u8; 4 * 4 * 3];
        let conversions = [
            Conversion::CopyImage(image.clone()),
            Conversion::RgbToGrey(image.clone()),
            Conversion::ExtractChannel {
                src: image.clone(),
                channel: 2,
            },
            Conversion::Yuv420Buffer(Yuv420Buffer {
                data: &frame,
                width: 4,
                height: 4,
            }),
            Conversion::PackedRgb(PackedRgbBuffer {
                data: &packed,
                stride: 12,
                width: 4,
                height: 4,
            }),
        ];
        for conversion in conversions.iter() {
            // 1x1 destination padded to 4 pixels, everything but (0, 0) is a sentinel
            let mut store = vec![0x5Au8; 16];
            let mut dst = ImageMut::borrowed(&mut store, 16, 1, 1, ChannelOrder::Rgba);
            convert_with_grid(conversion, Grid::new(4, 4), &mut dst).unwrap();
            let written = conversion.kind() != ConversionKind::PackedRgb;
            assert_eq!(store[..4].iter().any(|&v| v != 0x5A), written);
            assert!(
                store[4..].iter().all(|&v| v == 0x5A),
                "{:?}",
                conversion.kind()
            );
        }
    }

    #[test]
    fn test_rejected_source_reports_error() {
        let frame = [0u8; 10];
        let conversion: Conversion = Conversion::Yuv420Buffer(Yuv420Buffer {
            data: &frame,
            width: 4,
            height: 4,
        });
        let mut dst = ImageMut::<u8>::alloc(4, 4, ChannelOrder::Rgba);
        assert!(matches!(
            convert(&conversion, &mut dst),
            Err(YuvError::SourceSizeMismatch(_))
        ));
    }

    #[test]
    fn test_destination_larger_than_frame_is_rejected() {
        let frame = vec![128u8; Yuv420Buffer::min_len(4, 4)];
        let conversion: Conversion = Conversion::Yuv420Buffer(Yuv420Buffer {
            data: &frame,
            width: 4,
            height: 4,
        });
        assert_eq!(conversion.frame_extent(), Some((4, 4)));
        let mut dst = ImageMut::<u8>::alloc(4, 5, ChannelOrder::Rgba);
        assert!(matches!(
            convert(&conversion, &mut dst),
            Err(YuvError::DestinationExtentMismatch(_))
        ));
        assert!(dst.data.borrow().iter().all(|&v| v == 0));

        let mut smaller = ImageMut::<u8>::alloc(3, 2, ChannelOrder::Rgba);
        assert!(convert(&conversion, &mut smaller).is_ok());
    }
}
