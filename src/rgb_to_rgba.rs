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
use crate::images::{ImageMut, ImageSample, PackedRgbBuffer, Pixel};
use crate::numerics::normalize_u8;
use crate::yuv_error::check_destination_extent;
use crate::yuv_support::{PackedRgbOrder, OPAQUE_ALPHA};
use crate::YuvError;

const PIXELS_PER_WINDOW: usize = 4;
const WINDOW_SIZE: usize = PIXELS_PER_WINDOW * 3;

/// Reassembles 4 pixels out of the 12 byte window of work item `gx`.
///
/// Window is read as three 4 byte words, pixels straddle word boundaries.
#[inline(always)]
pub(crate) fn decode_packed_rgb_window<const ORDER: u8>(
    src: &[u8],
    stride: u32,
    gx: u32,
    y: u32,
) -> [Pixel; PIXELS_PER_WINDOW] {
    let order: PackedRgbOrder = ORDER.into();
    let offset = y as usize * stride as usize + gx as usize * WINDOW_SIZE;
    let window = &src[offset..offset + WINDOW_SIZE];
    let (s0, s1, s2) = (&window[0..4], &window[4..8], &window[8..12]);
    let triplets = [
        [s0[0], s0[1], s0[2]],
        [s0[3], s1[0], s1[1]],
        [s1[2], s1[3], s2[0]],
        [s2[1], s2[2], s2[3]],
    ];
    triplets.map(|px| {
        Pixel::new(
            normalize_u8(px[order.get_r_channel_offset()]),
            normalize_u8(px[order.get_g_channel_offset()]),
            normalize_u8(px[order.get_b_channel_offset()]),
            OPAQUE_ALPHA,
        )
    })
}

/// Packed 3 bytes per pixel, each work item converts four adjacent pixels.
pub struct PackedRgbKernel<'a, const ORDER: u8> {
    src: PackedRgbBuffer<'a>,
}

impl<'a, const ORDER: u8> PackedRgbKernel<'a, ORDER> {
    pub fn new(src: &PackedRgbBuffer<'a>) -> Self {
        Self { src: src.clone() }
    }
}

impl<D: ImageSample, const ORDER: u8> ConversionKernel<D> for PackedRgbKernel<'_, ORDER> {
    const NAME: &'static str = "convert_b_bgr_i_rgb";
    const PIXELS_PER_ITEM: u32 = PIXELS_PER_WINDOW as u32;

    #[inline]
    fn execute(&self, id: GlobalId, dst: &mut DestinationRow<'_, D>) {
        let x = id.x as usize * PIXELS_PER_WINDOW;
        // Quad is written entirely or not at all
        if (x + PIXELS_PER_WINDOW - 1 < dst.width() as usize) & (id.y < dst.height()) {
            let pixels =
                decode_packed_rgb_window::<ORDER>(self.src.data, self.src.stride, id.x, id.y);
            for (i, pixel) in pixels.into_iter().enumerate() {
                dst.write_pixel((x + i) as u32, pixel);
            }
        }
    }
}

fn packed_rgb_to_rgba_impl<D: ImageSample, const ORDER: u8>(
    src: &PackedRgbBuffer,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    src.check_constraints()?;
    check_destination_extent(src.width, src.height, dst.width, dst.height)?;
    launch(&PackedRgbKernel::<ORDER>::new(src), dst)
}

/// Convert packed RGB to RGBA.
///
/// Pixels are decoded in groups of four, when width is not a multiple of 4
/// trailing pixels of each row are not written.
/// Samples are normalized, alpha is always opaque.
///
/// # Arguments
///
/// * `src` - Source packed RGB buffer, stride is in bytes.
/// * `dst` - Destination image, usually RGBA.
///
pub fn packed_rgb_to_rgba<D: ImageSample>(
    src: &PackedRgbBuffer,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    packed_rgb_to_rgba_impl::<D, { PackedRgbOrder::Rgb as u8 }>(src, dst)
}

/// Convert packed BGR to RGBA.
///
/// Same as [packed_rgb_to_rgba] with red and blue bytes swapped in the source.
///
/// # Arguments
///
/// * `src` - Source packed BGR buffer, stride is in bytes.
/// * `dst` - Destination image, usually RGBA.
///
pub fn packed_bgr_to_rgba<D: ImageSample>(
    src: &PackedRgbBuffer,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    packed_rgb_to_rgba_impl::<D, { PackedRgbOrder::Bgr as u8 }>(src, dst)
}
