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
use yuvgrid::{
    packed_bgr_to_rgba, packed_rgb_to_rgba, packed_yuv422_to_rgba, ChannelOrder, ImageMut,
    PackedRgbBuffer, PackedYuv422Buffer,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    fuzz_packed_yuv422(data.0, data.1, data.2, data.3);
    fuzz_packed_rgb(data.0, data.1, data.4);
});

fn fuzz_packed_yuv422(i_width: u8, i_height: u8, value: u8, padding: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let stride = (i_width as u32 / 2) * 4 + padding as u32;
    let src = vec![value; stride as usize * i_height as usize];

    let packed = PackedYuv422Buffer {
        data: &src,
        stride,
        width: i_width as u32,
        height: i_height as u32,
    };

    let mut target_rgba = ImageMut::<u8>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Rgba,
    );
    packed_yuv422_to_rgba(&packed, &mut target_rgba).unwrap();

    let mut target_f32 = ImageMut::<f32>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Bgra,
    );
    packed_yuv422_to_rgba(&packed, &mut target_f32).unwrap();
}

fn fuzz_packed_rgb(i_width: u8, i_height: u8, value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let stride = (i_width as u32 / 4) * 12;
    let src = vec![value; stride as usize * i_height as usize];

    let packed = PackedRgbBuffer {
        data: &src,
        stride,
        width: i_width as u32,
        height: i_height as u32,
    };

    let mut target_rgba = ImageMut::<u8>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Rgba,
    );
    packed_rgb_to_rgba(&packed, &mut target_rgba).unwrap();
    packed_bgr_to_rgba(&packed, &mut target_rgba).unwrap();
}
