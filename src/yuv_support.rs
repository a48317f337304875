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
//! Fixed conversion coefficients and channel layout descriptions.

/// Red weight of luma, same weighting as OpenCV uses for RGB to grey.
pub const GREY_R_WEIGHT: f32 = 0.299;
/// Green weight of luma.
pub const GREY_G_WEIGHT: f32 = 0.587;
/// Blue weight of luma.
pub const GREY_B_WEIGHT: f32 = 0.114;

/// Studio range luma scale, 255 / 219.
pub const Y_SCALE: f32 = 1.1643;
/// Studio range luma bias, 16 / 255 rounded to 1 / 16.
pub const Y_BIAS: f32 = 0.0625;
/// Chroma is recentered around zero.
pub const CHROMA_BIAS: f32 = 0.5;

/// Contribution of the second chroma sample (V) into red.
pub const V_TO_R: f32 = 1.5958;
/// Contribution of the first chroma sample (U) into green, subtracted.
pub const U_TO_G: f32 = 0.39173;
/// Contribution of the second chroma sample (V) into green, subtracted.
pub const V_TO_G: f32 = 0.81290;
/// Contribution of the first chroma sample (U) into blue.
pub const U_TO_B: f32 = 2.017;

/// Value every conversion writes into alpha.
pub const OPAQUE_ALPHA: f32 = 1.0;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Channel order of an image store.
pub enum ChannelOrder {
    /// Single channel, reads as `(r, 0, 0, 1)`.
    R = 0,
    /// Single channel, reads as `(l, l, l, 1)`.
    Luminance = 1,
    Rgba = 2,
    Bgra = 3,
}

impl From<u8> for ChannelOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => ChannelOrder::R,
            1 => ChannelOrder::Luminance,
            2 => ChannelOrder::Rgba,
            3 => ChannelOrder::Bgra,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl ChannelOrder {
    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            ChannelOrder::R | ChannelOrder::Luminance => 1,
            ChannelOrder::Rgba | ChannelOrder::Bgra => 4,
        }
    }

    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        match self {
            ChannelOrder::R | ChannelOrder::Luminance | ChannelOrder::Rgba => 0,
            ChannelOrder::Bgra => 2,
        }
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        match self {
            ChannelOrder::R | ChannelOrder::Luminance => 0,
            ChannelOrder::Rgba | ChannelOrder::Bgra => 1,
        }
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        match self {
            ChannelOrder::R | ChannelOrder::Luminance => 0,
            ChannelOrder::Rgba => 2,
            ChannelOrder::Bgra => 0,
        }
    }

    #[inline(always)]
    pub const fn get_a_channel_offset(&self) -> usize {
        match self {
            ChannelOrder::R | ChannelOrder::Luminance => 0,
            ChannelOrder::Rgba | ChannelOrder::Bgra => 3,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Byte order of a packed 3 bytes per pixel source.
pub enum PackedRgbOrder {
    Rgb = 0,
    Bgr = 1,
}

impl From<u8> for PackedRgbOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => PackedRgbOrder::Rgb,
            1 => PackedRgbOrder::Bgr,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl PackedRgbOrder {
    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        match self {
            PackedRgbOrder::Rgb => 0,
            PackedRgbOrder::Bgr => 2,
        }
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        match self {
            PackedRgbOrder::Rgb => 2,
            PackedRgbOrder::Bgr => 0,
        }
    }
}

/// Byte positions inside one 4 byte group of packed 4:2:2.
///
/// Both luma samples sit on odd bytes, the chroma pair on even bytes.
pub(crate) struct PackedYuv422Layout;

impl PackedYuv422Layout {
    pub(crate) const U_POSITION: usize = 0;
    pub(crate) const FIRST_Y_POSITION: usize = 1;
    pub(crate) const V_POSITION: usize = 2;
    pub(crate) const SECOND_Y_POSITION: usize = 3;
    pub(crate) const GROUP_SIZE: usize = 4;
}
