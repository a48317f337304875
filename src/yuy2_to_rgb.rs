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
use crate::grid::{launch, ConversionKernel, DestinationRow, GlobalId};
use crate::images::{ImageMut, ImageSample, PackedYuv422Buffer};
use crate::numerics::{centered_chroma, studio_luma, yuv_to_rgb_scaled};
use crate::yuv_error::check_destination_extent;
use crate::yuv_support::PackedYuv422Layout;
use crate::YuvError;

/// Two luma samples and the chroma pair they share.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct PackedYuvPair {
    pub(crate) first_y: u8,
    pub(crate) second_y: u8,
    pub(crate) u: u8,
    pub(crate) v: u8,
}

/// Decodes the 4 byte group starting at output pixel `x`, which must be even.
#[inline(always)]
pub(crate) fn decode_packed_yuv422(src: &[u8], stride: u32, x: usize, y: u32) -> PackedYuvPair {
    let offset = y as usize * stride as usize + x * 2;
    let group = &src[offset..offset + PackedYuv422Layout::GROUP_SIZE];
    PackedYuvPair {
        first_y: group[PackedYuv422Layout::FIRST_Y_POSITION],
        second_y: group[PackedYuv422Layout::SECOND_Y_POSITION],
        u: group[PackedYuv422Layout::U_POSITION],
        v: group[PackedYuv422Layout::V_POSITION],
    }
}

/// Packed 4:2:2, each work item converts two adjacent pixels.
pub struct PackedYuv422Kernel<'a> {
    src: PackedYuv422Buffer<'a>,
}

impl<'a> PackedYuv422Kernel<'a> {
    pub fn new(src: &PackedYuv422Buffer<'a>) -> Self {
        Self { src: src.clone() }
    }
}

impl<D: ImageSample> ConversionKernel<D> for PackedYuv422Kernel<'_> {
    const NAME: &'static str = "convert_b_yuyv_i_rgb";
    const PIXELS_PER_ITEM: u32 = 2;

    #[inline]
    fn execute(&self, id: GlobalId, dst: &mut DestinationRow<'_, D>) {
        let x = id.x as usize * 2;
        // Pair is written entirely or not at all
        if (x + 1 < dst.width() as usize) & (id.y < dst.height()) {
            let pair = decode_packed_yuv422(self.src.data, self.src.stride, x, id.y);
            let u = centered_chroma(pair.u);
            let v = centered_chroma(pair.v);
            let x = x as u32;
            dst.write_pixel(x, yuv_to_rgb_scaled(studio_luma(pair.first_y), u, v));
            dst.write_pixel(x + 1, yuv_to_rgb_scaled(studio_luma(pair.second_y), u, v));
        }
    }
}

/// Convert packed YUV 4:2:2 to RGBA.
///
/// Every 4 bytes hold two pixels: shared U, first Y, shared V, second Y.
/// For odd widths the last pixel of every row has no complete group and is not written.
/// Studio range BT.601 is assumed, alpha is always opaque.
///
/// # Arguments
///
/// * `src` - Source packed buffer, stride is in bytes.
/// * `dst` - Destination image, usually RGBA.
///
pub fn packed_yuv422_to_rgba<D: ImageSample>(
    src: &PackedYuv422Buffer,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    src.check_constraints()?;
    check_destination_extent(src.width, src.height, dst.width, dst.height)?;
    launch(&PackedYuv422Kernel::new(src), dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{dispatch, Grid};
    use crate::numerics::yuv_to_rgb;
    use crate::yuv_support::ChannelOrder;
    use rand::Rng;

    #[test]
    fn test_pair_against_reference() {
        let data = [90u8, 81, 240, 145];
        let src = PackedYuv422Buffer {
            data: &data,
            stride: 4,
            width: 2,
            height: 1,
        };
        let mut dst = ImageMut::<f32>::alloc(2, 1, ChannelOrder::Rgba);
        packed_yuv422_to_rgba(&src, &mut dst).unwrap();

        let u = 90f32 / 255. - 0.5;
        let v = 240f32 / 255. - 0.5;
        let store = dst.data.borrow();
        for (px, luma) in store.chunks_exact(4).zip([81f32, 145f32]) {
            let y = 1.1643f32 * (luma / 255. - 0.0625);
            assert!((px[0] - (y + 1.5958 * v)).abs() < 1e-5);
            assert!((px[1] - (y - 0.39173 * u - 0.81290 * v)).abs() < 1e-5);
            assert!((px[2] - (y + 2.017 * u)).abs() < 1e-5);
            assert_eq!(px[3], 1.0);
        }
    }

    #[test]
    fn test_pair_shares_chroma() {
        let mut rng = rand::rng();
        let (width, height) = (10u32, 3u32);
        let data: Vec<u8> = (0..width * height * 2).map(|_| rng.random()).collect();
        let src = PackedYuv422Buffer {
            data: &data,
            stride: width * 2,
            width,
            height,
        };
        let mut dst = ImageMut::<f32>::alloc(width, height, ChannelOrder::Rgba);
        packed_yuv422_to_rgba(&src, &mut dst).unwrap();
        let image = dst.to_fixed();
        for y in 0..height {
            for pair in 0..width / 2 {
                let offset = (y * width * 2 + pair * 4) as usize;
                let group = &data[offset..offset + 4];
                let x = pair * 2;
                assert_eq!(
                    image.read_pixel(x, y),
                    yuv_to_rgb(group[1], group[0], group[2])
                );
                assert_eq!(
                    image.read_pixel(x + 1, y),
                    yuv_to_rgb(group[3], group[0], group[2])
                );
            }
        }
    }

    #[test]
    fn test_odd_width_leaves_last_pixel() {
        let data = vec![200u8; 3 * 2 * 2];
        let src = PackedYuv422Buffer {
            data: &data,
            stride: 6,
            width: 3,
            height: 2,
        };
        let mut store = vec![9u8; 3 * 4 * 2];
        let mut dst = ImageMut::borrowed(&mut store, 12, 3, 2, ChannelOrder::Rgba);
        packed_yuv422_to_rgba(&src, &mut dst).unwrap();
        for row in store.chunks_exact(12) {
            assert!(row[..8].iter().all(|&v| v != 9));
            assert!(row[8..].iter().all(|&v| v == 9));
        }
    }

    #[test]
    fn test_extra_work_items_are_no_ops() {
        let data = vec![128u8; 4];
        let src = PackedYuv422Buffer {
            data: &data,
            stride: 4,
            width: 2,
            height: 1,
        };
        let mut store = vec![3u8; 4 * 4 * 2];
        let mut dst = ImageMut::borrowed(&mut store, 16, 2, 2, ChannelOrder::Rgba);
        dispatch(&PackedYuv422Kernel::new(&src), Grid::new(4, 1), &mut dst).unwrap();
        assert!(store[..8].iter().all(|&v| v != 3));
        assert!(store[8..].iter().all(|&v| v == 3));
    }
}
