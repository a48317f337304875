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
use crate::images::{ImageMut, ImageSample, Yuv420Buffer, Yuv422Buffer, YuvPlanarImage};
use crate::numerics::yuv_to_rgb;
use crate::yuv_error::check_destination_extent;
use crate::YuvError;

/// Luma and both chroma samples feeding one output pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct YuvSample {
    pub(crate) y: u8,
    pub(crate) u: u8,
    pub(crate) v: u8,
}

// Chroma coordinates are floor divided luma coordinates in every layout below.

#[inline(always)]
pub(crate) fn decode_yuv420_buffer(
    src: &[u8],
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> YuvSample {
    let (x, y) = (x as usize, y as usize);
    let (w, h) = (width as usize, height as usize);
    let u_offset = x / 2 + (y / 2) * (w / 2) + w * h;
    YuvSample {
        y: src[x + y * w],
        u: src[u_offset],
        v: src[u_offset + (w / 2) * (h / 2)],
    }
}

#[inline(always)]
pub(crate) fn decode_yuv420_planar(src: &YuvPlanarImage<u8>, x: u32, y: u32) -> YuvSample {
    let (x, y) = (x as usize, y as usize);
    YuvSample {
        y: src.y_plane[x + y * src.y_stride as usize],
        u: src.u_plane[x / 2 + (y / 2) * src.u_stride as usize],
        v: src.v_plane[x / 2 + (y / 2) * src.v_stride as usize],
    }
}

/// Chroma rows are addressed as `(y / 2) * width`, odd lines reuse the chroma of the
/// even line above.
#[inline(always)]
pub(crate) fn decode_yuv422_buffer(
    src: &[u8],
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> YuvSample {
    let (x, y) = (x as usize, y as usize);
    let (w, h) = (width as usize, height as usize);
    let u_offset = x / 2 + (y / 2) * w + w * h;
    YuvSample {
        y: src[x + y * w],
        u: src[u_offset],
        v: src[u_offset + w * (h / 2)],
    }
}

/// YUV 4:2:0 frame stored in a single buffer.
pub struct Yuv420BufferKernel<'a> {
    src: Yuv420Buffer<'a>,
}

impl<'a> Yuv420BufferKernel<'a> {
    pub fn new(src: &Yuv420Buffer<'a>) -> Self {
        Self { src: src.clone() }
    }
}

impl<D: ImageSample> ConversionKernel<D> for Yuv420BufferKernel<'_> {
    const NAME: &'static str = "convert_b_yuv420p_i_rgb";

    #[inline]
    fn execute(&self, id: GlobalId, dst: &mut DestinationRow<'_, D>) {
        if dst.contains(id.x) {
            let s = decode_yuv420_buffer(
                self.src.data,
                id.x,
                id.y,
                self.src.width,
                self.src.height,
            );
            dst.write_pixel(id.x, yuv_to_rgb(s.y, s.u, s.v));
        }
    }
}

/// YUV 4:2:0 stored as three separate planes with their own strides.
pub struct Yuv420PlanarKernel<'a> {
    src: YuvPlanarImage<'a, u8>,
}

impl<'a> Yuv420PlanarKernel<'a> {
    pub fn new(src: &YuvPlanarImage<'a, u8>) -> Self {
        Self { src: src.clone() }
    }
}

impl<D: ImageSample> ConversionKernel<D> for Yuv420PlanarKernel<'_> {
    const NAME: &'static str = "convert_bbb_yuv420p_i_rgb";

    #[inline]
    fn execute(&self, id: GlobalId, dst: &mut DestinationRow<'_, D>) {
        if dst.contains(id.x) {
            let s = decode_yuv420_planar(&self.src, id.x, id.y);
            dst.write_pixel(id.x, yuv_to_rgb(s.y, s.u, s.v));
        }
    }
}

/// YUV 4:2:2 frame stored in a single buffer.
pub struct Yuv422BufferKernel<'a> {
    src: Yuv422Buffer<'a>,
}

impl<'a> Yuv422BufferKernel<'a> {
    pub fn new(src: &Yuv422Buffer<'a>) -> Self {
        Self { src: src.clone() }
    }
}

impl<D: ImageSample> ConversionKernel<D> for Yuv422BufferKernel<'_> {
    const NAME: &'static str = "convert_b_yuv422p_i_rgb";

    #[inline]
    fn execute(&self, id: GlobalId, dst: &mut DestinationRow<'_, D>) {
        if dst.contains(id.x) {
            let s = decode_yuv422_buffer(
                self.src.data,
                id.x,
                id.y,
                self.src.width,
                self.src.height,
            );
            dst.write_pixel(id.x, yuv_to_rgb(s.y, s.u, s.v));
        }
    }
}

/// Convert YUV 420 frame stored in one buffer to RGBA.
///
/// Buffer holds Y plane of `width * height` samples followed by U and V planes of
/// `(width / 2) * (height / 2)` samples each.
/// Studio range BT.601 is assumed, alpha is always opaque.
///
/// # Arguments
///
/// * `src` - Source YUV 420 frame.
/// * `dst` - Destination image, usually RGBA.
///
pub fn yuv420_buffer_to_rgba<D: ImageSample>(
    src: &Yuv420Buffer,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    src.check_constraints()?;
    check_destination_extent(src.width, src.height, dst.width, dst.height)?;
    launch(&Yuv420BufferKernel::new(src), dst)
}

/// Convert YUV 420 planar image to RGBA.
///
/// This is the layout decoders of ffmpeg family libraries usually produce,
/// every plane may be padded with its own stride.
/// Studio range BT.601 is assumed, alpha is always opaque.
///
/// # Arguments
///
/// * `src` - Source planar YUV 420 image.
/// * `dst` - Destination image, usually RGBA.
///
pub fn yuv420_planar_to_rgba<D: ImageSample>(
    src: &YuvPlanarImage<u8>,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    src.check_constraints()?;
    check_destination_extent(src.width, src.height, dst.width, dst.height)?;
    launch(&Yuv420PlanarKernel::new(src), dst)
}

/// Convert YUV 422 frame stored in one buffer to RGBA.
///
/// Buffer holds Y plane followed by two half width chroma planes.
/// Studio range BT.601 is assumed, alpha is always opaque.
///
/// # Arguments
///
/// * `src` - Source YUV 422 frame.
/// * `dst` - Destination image, usually RGBA.
///
pub fn yuv422_buffer_to_rgba<D: ImageSample>(
    src: &Yuv422Buffer,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    src.check_constraints()?;
    check_destination_extent(src.width, src.height, dst.width, dst.height)?;
    launch(&Yuv422BufferKernel::new(src), dst)
}
