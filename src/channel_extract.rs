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
use crate::images::{Image, ImageMut, ImageSample, Pixel};
use crate::YuvError;

/// Selects a channel with a priority chain.
///
/// Starts from channel 0 and is overridden by index 1, 2 or 3, any other index
/// silently selects channel 0.
#[inline(always)]
pub(crate) fn select_channel(pixel: Pixel, channel: i32) -> f32 {
    let mut res = pixel.0[0];
    if channel == 1 {
        res = pixel.0[1];
    }
    if channel == 2 {
        res = pixel.0[2];
    }
    if channel == 3 {
        res = pixel.0[3];
    }
    res
}

/// Extracts one channel of a 4 channel image and replicates it into every destination channel.
pub struct ExtractChannelKernel<'a, S: ImageSample> {
    src: Image<'a, S>,
    channel: i32,
}

impl<'a, S: ImageSample> ExtractChannelKernel<'a, S> {
    pub fn new(src: &Image<'a, S>, channel: i32) -> Self {
        Self {
            src: src.clone(),
            channel,
        }
    }
}

impl<S: ImageSample, D: ImageSample> ConversionKernel<D> for ExtractChannelKernel<'_, S> {
    const NAME: &'static str = "convert_i_y_i_rgba";

    #[inline]
    fn execute(&self, id: GlobalId, dst: &mut DestinationRow<'_, D>) {
        if dst.contains(id.x) {
            let pixel = self.src.read_nearest(id.x, id.y);
            dst.write_pixel(id.x, Pixel::splat(select_channel(pixel, self.channel)));
        }
    }
}

/// Extracts single channel of image.
///
/// # Arguments
///
/// * `src` - Source image, channels are read in RGBA order.
/// * `channel` - Channel index 0..=3, out of range index selects channel 0.
/// * `dst` - Destination image, usually single channel.
///
pub fn extract_channel<S: ImageSample, D: ImageSample>(
    src: &Image<S>,
    channel: i32,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    src.check_constraints()?;
    launch(&ExtractChannelKernel::new(src, channel), dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yuv_support::ChannelOrder;
    use rand::Rng;

    #[test]
    fn test_priority_chain() {
        let p = Pixel::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(select_channel(p, 0), 0.1);
        assert_eq!(select_channel(p, 1), 0.2);
        assert_eq!(select_channel(p, 2), 0.3);
        assert_eq!(select_channel(p, 3), 0.4);
        assert_eq!(select_channel(p, 4), 0.1);
        assert_eq!(select_channel(p, -1), 0.1);
        assert_eq!(select_channel(p, i32::MAX), 0.1);
    }

    #[test]
    fn test_round_trip_through_channels() {
        let mut rng = rand::rng();
        let (width, height) = (21usize, 11usize);
        let source: Vec<u8> = (0..width * height * 4).map(|_| rng.random()).collect();
        let src = Image {
            data: &source,
            stride: width as u32 * 4,
            width: width as u32,
            height: height as u32,
            order: ChannelOrder::Rgba,
        };

        let mut recombined = vec![0u8; source.len()];
        for channel in 0..4 {
            let mut plane = ImageMut::<u8>::alloc(width as u32, height as u32, ChannelOrder::R);
            extract_channel(&src, channel, &mut plane).unwrap();
            for (dst, &v) in recombined
                .chunks_exact_mut(4)
                .zip(plane.data.borrow().iter())
            {
                dst[channel as usize] = v;
            }
        }
        assert_eq!(recombined, source);
    }

    #[test]
    fn test_invalid_channel_falls_back_to_red() {
        let source = [10u8, 20, 30, 40];
        let src = Image {
            data: &source,
            stride: 4,
            width: 1,
            height: 1,
            order: ChannelOrder::Rgba,
        };
        let mut plane = ImageMut::<u8>::alloc(1, 1, ChannelOrder::R);
        extract_channel(&src, 7, &mut plane).unwrap();
        assert_eq!(plane.data.borrow(), &[10]);
    }

    #[test]
    fn test_bgra_source_channels_are_rgba_ordered() {
        let source = [10u8, 20, 30, 40];
        let src = Image {
            data: &source,
            stride: 4,
            width: 1,
            height: 1,
            order: ChannelOrder::Bgra,
        };
        let mut plane = ImageMut::<u8>::alloc(1, 1, ChannelOrder::R);
        extract_channel(&src, 0, &mut plane).unwrap();
        assert_eq!(plane.data.borrow(), &[30]);
    }
}
