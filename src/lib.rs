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
//! Pixel format conversion kernels executed over a two dimensional work grid.
//!
//! Every conversion is a stateless kernel run once per output coordinate, or per
//! small group of output pixels for packed formats. Work items outside of the
//! destination image do nothing. Kernels can be run directly with [dispatch] over
//! any [Grid], through the host functions which validate buffers first, or by
//! format tag with [convert].
//!
//! Rows of the grid are processed in parallel when `rayon` feature is enabled.
#![forbid(unsafe_code)]
mod channel_extract;
mod conversion;
mod grid;
mod image_copy;
mod images;
mod numerics;
mod rgb_to_rgba;
mod rgb_to_y;
mod yuv_error;
mod yuv_support;
mod yuv_to_rgba;
mod yuy2_to_rgb;

pub use channel_extract::{extract_channel, ExtractChannelKernel};
pub use conversion::{convert, convert_with_grid, Conversion, ConversionKind};
pub use grid::{dispatch, launch, ConversionKernel, DestinationRow, GlobalId, Grid};
pub use image_copy::{copy_image, CopyImageKernel};
pub use images::{
    BufferStoreMut, Image, ImageMut, ImageSample, PackedRgbBuffer, PackedYuv422Buffer, Pixel,
    Yuv420Buffer, Yuv422Buffer, YuvPlanarImage,
};
pub use numerics::{rgb_to_grey, yuv_to_rgb};
pub use rgb_to_rgba::{packed_bgr_to_rgba, packed_rgb_to_rgba, PackedRgbKernel};
pub use rgb_to_y::{rgb_to_grey_image, RgbToGreyKernel};
pub use yuv_error::{MismatchedSize, YuvError};
pub use yuv_support::{
    ChannelOrder, PackedRgbOrder, CHROMA_BIAS, GREY_B_WEIGHT, GREY_G_WEIGHT, GREY_R_WEIGHT,
    OPAQUE_ALPHA, U_TO_B, U_TO_G, V_TO_G, V_TO_R, Y_BIAS, Y_SCALE,
};
pub use yuv_to_rgba::{
    yuv420_buffer_to_rgba, yuv420_planar_to_rgba, yuv422_buffer_to_rgba, Yuv420BufferKernel,
    Yuv420PlanarKernel, Yuv422BufferKernel,
};
pub use yuy2_to_rgb::{packed_yuv422_to_rgba, PackedYuv422Kernel};
