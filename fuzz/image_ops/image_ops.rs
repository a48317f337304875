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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuvgrid::{copy_image, extract_channel, rgb_to_grey_image, ChannelOrder, Image, ImageMut};

fuzz_target!(|data: (u8, u8, u8, i32, bool)| {
    fuzz_image_ops(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_image_ops(i_width: u8, i_height: u8, value: u8, channel: i32, src_bgra: bool) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let order = if src_bgra {
        ChannelOrder::Bgra
    } else {
        ChannelOrder::Rgba
    };
    let src_data = vec![value; i_width as usize * i_height as usize * 4];
    let src = Image {
        data: &src_data,
        stride: i_width as u32 * 4,
        width: i_width as u32,
        height: i_height as u32,
        order,
    };

    let mut target_rgba = ImageMut::<u16>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Rgba,
    );
    copy_image(&src, &mut target_rgba).unwrap();

    let mut target_grey = ImageMut::<u8>::alloc(i_width as u32, i_height as u32, ChannelOrder::R);
    rgb_to_grey_image(&src, &mut target_grey).unwrap();
    extract_channel(&src, channel, &mut target_grey).unwrap();

    // Smaller destination, reads are clamped to the source
    let mut target_small = ImageMut::<f32>::alloc(
        (i_width as u32 / 2).max(1),
        (i_height as u32 / 2).max(1),
        ChannelOrder::Luminance,
    );
    extract_channel(&src, channel, &mut target_small).unwrap();
}
