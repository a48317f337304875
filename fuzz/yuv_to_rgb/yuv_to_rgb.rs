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
    convert_with_grid, yuv420_buffer_to_rgba, yuv420_planar_to_rgba, yuv422_buffer_to_rgba,
    ChannelOrder, Conversion, Grid, ImageMut, Yuv420Buffer, Yuv422Buffer, YuvPlanarImage,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, u8)| {
    fuzz_yuv_420(data.0, data.1, data.2, data.3, data.4);
    fuzz_yuv_420_planar(data.0, data.1, data.2, data.3, data.4);
    fuzz_yuv_422(data.0, data.1, data.2, data.3, data.4);
    fuzz_oversized_grid(data.0, data.1, data.5, data.6);
});

fn fuzz_yuv_420(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let luma = i_width as usize * i_height as usize;
    let total = Yuv420Buffer::min_len(i_width as u32, i_height as u32);
    let mut buffer = vec![y_value; total];
    let chroma = (total - luma) / 2;
    buffer[luma..luma + chroma].fill(u_value);
    buffer[luma + chroma..].fill(v_value);

    let frame = Yuv420Buffer {
        data: &buffer,
        width: i_width as u32,
        height: i_height as u32,
    };

    let mut target_rgba = ImageMut::<u8>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Rgba,
    );
    yuv420_buffer_to_rgba(&frame, &mut target_rgba).unwrap();

    let mut target_bgra = ImageMut::<u16>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Bgra,
    );
    yuv420_buffer_to_rgba(&frame, &mut target_bgra).unwrap();
}

fn fuzz_yuv_420_planar(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let y_plane = vec![y_value; i_height as usize * i_width as usize];
    let u_plane = vec![u_value; (i_width as usize).div_ceil(2) * (i_height as usize).div_ceil(2)];
    let v_plane = vec![v_value; (i_width as usize).div_ceil(2) * (i_height as usize).div_ceil(2)];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: i_width as u32,
        u_plane: &u_plane,
        u_stride: (i_width as u32).div_ceil(2),
        v_plane: &v_plane,
        v_stride: (i_width as u32).div_ceil(2),
        width: i_width as u32,
        height: i_height as u32,
    };

    let mut target_rgba = ImageMut::<u8>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Rgba,
    );
    yuv420_planar_to_rgba(&planar_image, &mut target_rgba).unwrap();

    let mut target_f32 = ImageMut::<f32>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Rgba,
    );
    yuv420_planar_to_rgba(&planar_image, &mut target_f32).unwrap();
}

fn fuzz_yuv_422(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let luma = i_width as usize * i_height as usize;
    let total = Yuv422Buffer::min_len(i_width as u32, i_height as u32);
    let mut buffer = vec![y_value; total];
    let chroma = (total - luma) / 2;
    buffer[luma..luma + chroma].fill(u_value);
    buffer[luma + chroma..].fill(v_value);

    let frame = Yuv422Buffer {
        data: &buffer,
        width: i_width as u32,
        height: i_height as u32,
    };

    let mut target_rgba = ImageMut::<u8>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Rgba,
    );
    yuv422_buffer_to_rgba(&frame, &mut target_rgba).unwrap();
}

fn fuzz_oversized_grid(i_width: u8, i_height: u8, extra_x: u8, extra_y: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let total = Yuv420Buffer::min_len(i_width as u32, i_height as u32);
    let buffer = vec![128u8; total];
    let frame = Yuv420Buffer {
        data: &buffer,
        width: i_width as u32,
        height: i_height as u32,
    };
    let grid = Grid::new(
        i_width as u32 + extra_x as u32,
        i_height as u32 + extra_y as u32,
    );
    let mut target_rgba = ImageMut::<u8>::alloc(
        i_width as u32,
        i_height as u32,
        ChannelOrder::Rgba,
    );
    convert_with_grid(&Conversion::<u8>::Yuv420Buffer(frame), grid, &mut target_rgba).unwrap();
}
