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
use criterion::{criterion_group, criterion_main, Criterion};
use yuvgrid::{
    copy_image, extract_channel, packed_rgb_to_rgba, packed_yuv422_to_rgba, rgb_to_grey_image,
    yuv420_buffer_to_rgba, yuv420_planar_to_rgba, yuv422_buffer_to_rgba, ChannelOrder, Image,
    ImageMut, PackedRgbBuffer, PackedYuv422Buffer, Yuv420Buffer, Yuv422Buffer, YuvPlanarImage,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let (w, h) = (width as usize, height as usize);
    let chroma = (w / 2) * (h / 2);

    let yuv420: Vec<u8> = (0..Yuv420Buffer::min_len(width, height))
        .map(|i| (i % 219 + 16) as u8)
        .collect();
    let yuv422: Vec<u8> = (0..2 * w * h).map(|i| (i % 219 + 16) as u8).collect();
    let packed_rgb: Vec<u8> = (0..3 * w * h).map(|i| (i % 256) as u8).collect();
    let rgba: Vec<u8> = (0..4 * w * h).map(|i| (i % 256) as u8).collect();

    let mut rgba_dst = ImageMut::<u8>::alloc(width, height, ChannelOrder::Rgba);
    let mut grey_dst = ImageMut::<u8>::alloc(width, height, ChannelOrder::R);

    let combined = Yuv420Buffer {
        data: &yuv420,
        width,
        height,
    };
    let planar = YuvPlanarImage {
        y_plane: &yuv420[..w * h],
        y_stride: width,
        u_plane: &yuv420[w * h..w * h + chroma],
        u_stride: width / 2,
        v_plane: &yuv420[w * h + chroma..],
        v_stride: width / 2,
        width,
        height,
    };
    let combined422 = Yuv422Buffer {
        data: &yuv422,
        width,
        height,
    };
    let packed422 = PackedYuv422Buffer {
        data: &yuv422,
        stride: width * 2,
        width,
        height,
    };
    let packed = PackedRgbBuffer {
        data: &packed_rgb,
        stride: width * 3,
        width,
        height,
    };
    let image = Image {
        data: &rgba,
        stride: width * 4,
        width,
        height,
        order: ChannelOrder::Rgba,
    };

    c.bench_function("yuvgrid: YUV 420 buffer -> RGBA", |b| {
        b.iter(|| yuv420_buffer_to_rgba(&combined, &mut rgba_dst).unwrap())
    });

    c.bench_function("yuvgrid: YUV 420 planar -> RGBA", |b| {
        b.iter(|| yuv420_planar_to_rgba(&planar, &mut rgba_dst).unwrap())
    });

    c.bench_function("yuvgrid: YUV 422 buffer -> RGBA", |b| {
        b.iter(|| yuv422_buffer_to_rgba(&combined422, &mut rgba_dst).unwrap())
    });

    c.bench_function("yuvgrid: packed YUV 422 -> RGBA", |b| {
        b.iter(|| packed_yuv422_to_rgba(&packed422, &mut rgba_dst).unwrap())
    });

    c.bench_function("yuvgrid: packed RGB -> RGBA", |b| {
        b.iter(|| packed_rgb_to_rgba(&packed, &mut rgba_dst).unwrap())
    });

    c.bench_function("yuvgrid: RGBA -> RGBA", |b| {
        b.iter(|| copy_image(&image, &mut rgba_dst).unwrap())
    });

    c.bench_function("yuvgrid: RGBA -> grey", |b| {
        b.iter(|| rgb_to_grey_image(&image, &mut grey_dst).unwrap())
    });

    c.bench_function("yuvgrid: RGBA -> alpha channel", |b| {
        b.iter(|| extract_channel(&image, 3, &mut grey_dst).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
