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
use crate::yuv_error::{
    check_base_size, check_image_store, check_overflow_v2, check_overflow_v3, check_source_len,
    check_source_plane,
};
use crate::yuv_support::ChannelOrder;
use crate::YuvError;
use num_traits::{AsPrimitive, Bounded};
use std::fmt::Debug;

/// Normalized 4 component pixel, RGBA or YUV+unused depending on the context.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Pixel(pub [f32; 4]);

impl Pixel {
    #[inline(always)]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Pixel([r, g, b, a])
    }

    #[inline(always)]
    pub const fn splat(v: f32) -> Self {
        Pixel([v; 4])
    }

    #[inline(always)]
    pub const fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub const fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub const fn b(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub const fn a(&self) -> f32 {
        self.0[3]
    }
}

/// Sample type of an image store with normalized float access.
///
/// Integer samples are unsigned normalized, writes are rounded to nearest even
/// and saturated. Float samples are stored as is.
pub trait ImageSample: Copy + Debug + Default + Send + Sync + AsPrimitive<f32> + 'static {
    fn to_normalized(self) -> f32;
    fn from_normalized(v: f32) -> Self;
}

macro_rules! unorm_sample {
    ($sample:ty) => {
        impl ImageSample for $sample {
            #[inline(always)]
            fn to_normalized(self) -> f32 {
                let max: f32 = <$sample as Bounded>::max_value().as_();
                let v: f32 = self.as_();
                v / max
            }

            #[inline(always)]
            fn from_normalized(v: f32) -> Self {
                let max: f32 = <$sample as Bounded>::max_value().as_();
                // NaN saturates to 0 on cast
                (v * max).round_ties_even().clamp(0.0, max) as $sample
            }
        }
    };
}

unorm_sample!(u8);
unorm_sample!(u16);

impl ImageSample for f32 {
    #[inline(always)]
    fn to_normalized(self) -> f32 {
        self
    }

    #[inline(always)]
    fn from_normalized(v: f32) -> Self {
        v
    }
}

#[inline(always)]
pub(crate) fn load_pixel<T: ImageSample>(px: &[T], order: ChannelOrder) -> Pixel {
    match order {
        ChannelOrder::R => Pixel::new(px[0].to_normalized(), 0.0, 0.0, 1.0),
        ChannelOrder::Luminance => {
            let l = px[0].to_normalized();
            Pixel::new(l, l, l, 1.0)
        }
        ChannelOrder::Rgba | ChannelOrder::Bgra => Pixel::new(
            px[order.get_r_channel_offset()].to_normalized(),
            px[order.get_g_channel_offset()].to_normalized(),
            px[order.get_b_channel_offset()].to_normalized(),
            px[order.get_a_channel_offset()].to_normalized(),
        ),
    }
}

#[inline(always)]
pub(crate) fn store_pixel<T: ImageSample>(px: &mut [T], order: ChannelOrder, pixel: Pixel) {
    match order {
        ChannelOrder::R | ChannelOrder::Luminance => {
            px[0] = T::from_normalized(pixel.r());
        }
        ChannelOrder::Rgba | ChannelOrder::Bgra => {
            px[order.get_r_channel_offset()] = T::from_normalized(pixel.r());
            px[order.get_g_channel_offset()] = T::from_normalized(pixel.g());
            px[order.get_b_channel_offset()] = T::from_normalized(pixel.b());
            px[order.get_a_channel_offset()] = T::from_normalized(pixel.a());
        }
    }
}

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug, Clone)]
/// Read-only image
pub struct Image<'a, T>
where
    T: ImageSample,
{
    pub data: &'a [T],
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
    pub order: ChannelOrder,
}

impl<T> Image<'_, T>
where
    T: ImageSample,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_image_store(
            self.data.len(),
            self.stride,
            self.width,
            self.height,
            self.order.get_channels_count(),
        )
    }

    /// Reads normalized pixel, coordinates must be inside the image.
    #[inline(always)]
    pub fn read_pixel(&self, x: u32, y: u32) -> Pixel {
        let cn = self.order.get_channels_count();
        let start = y as usize * self.stride as usize + x as usize * cn;
        load_pixel(&self.data[start..start + cn], self.order)
    }

    /// Nearest sample with coordinates clamped to the image edge.
    #[inline(always)]
    pub fn read_nearest(&self, x: u32, y: u32) -> Pixel {
        self.read_pixel(
            x.min(self.width.saturating_sub(1)),
            y.min(self.height.saturating_sub(1)),
        )
    }
}

#[derive(Debug)]
/// Write-only destination image
pub struct ImageMut<'a, T>
where
    T: ImageSample,
{
    pub data: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
    pub order: ChannelOrder,
}

impl<'a, T> ImageMut<'a, T>
where
    T: ImageSample,
{
    /// Allocates tightly packed destination filled with default samples
    pub fn alloc(width: u32, height: u32, order: ChannelOrder) -> Self {
        let stride = width as usize * order.get_channels_count();
        Self {
            data: BufferStoreMut::Owned(vec![T::default(); stride * height as usize]),
            stride: stride as u32,
            width,
            height,
            order,
        }
    }

    /// Wraps caller owned store, stride is in elements
    pub fn borrowed(
        data: &'a mut [T],
        stride: u32,
        width: u32,
        height: u32,
        order: ChannelOrder,
    ) -> Self {
        Self {
            data: BufferStoreMut::Borrowed(data),
            stride,
            width,
            height,
            order,
        }
    }

    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_image_store(
            self.data.borrow().len(),
            self.stride,
            self.width,
            self.height,
            self.order.get_channels_count(),
        )
    }

    pub fn to_fixed(&self) -> Image<'_, T> {
        Image {
            data: self.data.borrow(),
            stride: self.stride,
            width: self.width,
            height: self.height,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone)]
/// YUV 4:2:0 image stored as three independent planes
pub struct YuvPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub u_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub u_stride: u32,
    pub v_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub v_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvPlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_base_size(self.width, self.height)?;
        let chroma_width = (self.width as usize).div_ceil(2);
        let chroma_height = (self.height as usize).div_ceil(2);
        check_source_plane(
            self.y_plane.len(),
            self.y_stride as usize,
            self.width as usize,
            self.height as usize,
        )?;
        check_source_plane(
            self.u_plane.len(),
            self.u_stride as usize,
            chroma_width,
            chroma_height,
        )?;
        check_source_plane(
            self.v_plane.len(),
            self.v_stride as usize,
            chroma_width,
            chroma_height,
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// YUV 4:2:0 frame in one buffer: Y plane, then quarter sized U, then V
pub struct Yuv420Buffer<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl Yuv420Buffer<'_> {
    /// Smallest buffer the decoder can read for a frame of this size.
    ///
    /// It is `1.5 * width * height` for even dimensions.
    pub fn min_len(width: u32, height: u32) -> usize {
        let (w, h) = (width as usize, height as usize);
        if w == 0 || h == 0 {
            return 0;
        }
        // Bottom right V sample is the farthest one
        w * h + (w / 2) * (h / 2) + (w - 1) / 2 + ((h - 1) / 2) * (w / 2) + 1
    }

    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_base_size(self.width, self.height)?;
        check_overflow_v3(self.width as usize, self.height as usize, 2)?;
        check_source_len(self.data.len(), Self::min_len(self.width, self.height))
    }
}

#[derive(Debug, Clone)]
/// YUV 4:2:2 frame in one buffer: Y plane, then two half width chroma planes
pub struct Yuv422Buffer<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl Yuv422Buffer<'_> {
    /// Smallest buffer the decoder can read for a frame of this size.
    ///
    /// Chroma rows are addressed with `(y / 2) * width`, so a full `2 * width * height`
    /// frame always fits.
    pub fn min_len(width: u32, height: u32) -> usize {
        let (w, h) = (width as usize, height as usize);
        if w == 0 || h == 0 {
            return 0;
        }
        w * h + w * (h / 2) + (w - 1) / 2 + ((h - 1) / 2) * w + 1
    }

    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_base_size(self.width, self.height)?;
        check_overflow_v3(self.width as usize, self.height as usize, 2)?;
        check_source_len(self.data.len(), Self::min_len(self.width, self.height))
    }
}

#[derive(Debug, Clone)]
/// Packed 4:2:2, every 4 bytes carry two pixels
pub struct PackedYuv422Buffer<'a> {
    pub data: &'a [u8],
    /// Bytes per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl PackedYuv422Buffer<'_> {
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_base_size(self.width, self.height)?;
        let row_size = check_overflow_v2(self.width as usize / 2, 4)?;
        check_source_plane(
            self.data.len(),
            self.stride as usize,
            row_size,
            self.height as usize,
        )
    }
}

#[derive(Debug, Clone)]
/// Packed 3 bytes per pixel, decoded 4 pixels from 12 bytes at a time
pub struct PackedRgbBuffer<'a> {
    pub data: &'a [u8],
    /// Bytes per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl PackedRgbBuffer<'_> {
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_base_size(self.width, self.height)?;
        let row_size = check_overflow_v2(self.width as usize / 4, 12)?;
        check_source_plane(
            self.data.len(),
            self.stride as usize,
            row_size,
            self.height as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_normalized_round_trip() {
        for v in 0..=255u8 {
            assert_eq!(u8::from_normalized(v.to_normalized()), v);
        }
    }

    #[test]
    fn test_unorm_saturates() {
        assert_eq!(u8::from_normalized(1.7), 255);
        assert_eq!(u8::from_normalized(-0.3), 0);
        assert_eq!(u8::from_normalized(f32::NAN), 0);
        assert_eq!(u16::from_normalized(1.0), u16::MAX);
    }

    #[test]
    fn test_single_channel_reads() {
        let data = [51u8];
        let r = Image {
            data: &data,
            stride: 1,
            width: 1,
            height: 1,
            order: ChannelOrder::R,
        };
        assert_eq!(r.read_pixel(0, 0), Pixel::new(0.2, 0.0, 0.0, 1.0));
        let l = Image {
            order: ChannelOrder::Luminance,
            ..r
        };
        assert_eq!(l.read_pixel(0, 0), Pixel::new(0.2, 0.2, 0.2, 1.0));
    }

    #[test]
    fn test_bgra_swizzle() {
        let data = [0u8, 51, 255, 102];
        let image = Image {
            data: &data,
            stride: 4,
            width: 1,
            height: 1,
            order: ChannelOrder::Bgra,
        };
        let p = image.read_pixel(0, 0);
        assert_eq!(p, Pixel::new(1.0, 0.2, 0.0, 0.4));

        let mut store = [0u8; 4];
        store_pixel(&mut store, ChannelOrder::Bgra, p);
        assert_eq!(store, data);
    }

    #[test]
    fn test_read_nearest_clamps() {
        let data = [1u8, 2, 3, 4];
        let image = Image {
            data: &data,
            stride: 2,
            width: 2,
            height: 2,
            order: ChannelOrder::R,
        };
        assert_eq!(image.read_nearest(7, 9), image.read_pixel(1, 1));
    }

    #[test]
    fn test_combined_buffer_sizes() {
        let data = vec![0u8; Yuv420Buffer::min_len(6, 4)];
        assert_eq!(data.len(), 36);
        let buffer = Yuv420Buffer {
            data: &data,
            width: 6,
            height: 4,
        };
        assert!(buffer.check_constraints().is_ok());
        let short = Yuv420Buffer {
            data: &data[..35],
            width: 6,
            height: 4,
        };
        assert!(matches!(
            short.check_constraints(),
            Err(YuvError::SourceSizeMismatch(_))
        ));

        let data = vec![0u8; 4 * 2 * 2];
        let buffer = Yuv422Buffer {
            data: &data,
            width: 4,
            height: 2,
        };
        assert!(buffer.check_constraints().is_ok());
        assert_eq!(Yuv422Buffer::min_len(4, 2), 14);

        // Odd sized frame still reads one U/V sample past the luma plane
        assert_eq!(Yuv420Buffer::min_len(1, 1), 2);
    }

    #[test]
    fn test_planar_constraints() {
        let y = [0u8; 15];
        let uv = [0u8; 6];
        let image = YuvPlanarImage {
            y_plane: &y,
            y_stride: 5,
            u_plane: &uv,
            u_stride: 3,
            v_plane: &uv,
            v_stride: 3,
            width: 5,
            height: 3,
        };
        assert!(image.check_constraints().is_ok());
        let image = YuvPlanarImage {
            v_plane: &uv[..5],
            ..image
        };
        assert!(image.check_constraints().is_err());
    }
}
