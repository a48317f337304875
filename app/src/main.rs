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
mod frames;

use frames::{gradient_frame, SyntheticFrame};
use image::{ImageBuffer, Luma, Rgba};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use yuvgrid::{
    convert, ChannelOrder, Conversion, ImageMut, PackedRgbBuffer, PackedYuv422Buffer,
    Yuv420Buffer, Yuv422Buffer, YuvError, YuvPlanarImage,
};

fn save(name: &str, image: &ImageMut<u8>) {
    let store = image.data.borrow().to_vec();
    let saved = match image.order {
        ChannelOrder::Rgba => {
            ImageBuffer::<Rgba<u8>, _>::from_raw(image.width, image.height, store)
                .map(|b| b.save(name))
        }
        ChannelOrder::Luminance | ChannelOrder::R => {
            ImageBuffer::<Luma<u8>, _>::from_raw(image.width, image.height, store)
                .map(|b| b.save(name))
        }
        ChannelOrder::Bgra => None,
    };
    match saved {
        Some(Ok(())) => info!(name, "saved"),
        Some(Err(err)) => warn!(name, %err, "failed to save"),
        None => warn!(name, "store does not match image size"),
    }
}

fn run(
    name: &str,
    conversion: &Conversion,
    width: u32,
    height: u32,
    order: ChannelOrder,
) -> Result<ImageMut<'static, u8>, YuvError> {
    let mut dst = ImageMut::<u8>::alloc(width, height, order);
    let start_time = Instant::now();
    convert(conversion, &mut dst)?;
    info!(name, kind = ?conversion.kind(), elapsed = ?start_time.elapsed(), "converted");
    Ok(dst)
}

fn main() -> Result<(), YuvError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let width = 1920u32;
    let height = 1080u32;
    let SyntheticFrame {
        yuv420,
        yuv422,
        packed422,
        packed_rgb,
    } = gradient_frame(width, height);

    let (w, h) = (width as usize, height as usize);
    let chroma = (w / 2) * (h / 2);

    let yuv420_rgba = run(
        "yuv420.png",
        &Conversion::Yuv420Buffer(Yuv420Buffer {
            data: &yuv420,
            width,
            height,
        }),
        width,
        height,
        ChannelOrder::Rgba,
    )?;
    save("yuv420.png", &yuv420_rgba);

    let planar = run(
        "yuv420_planar.png",
        &Conversion::Yuv420Planar(YuvPlanarImage {
            y_plane: &yuv420[..w * h],
            y_stride: width,
            u_plane: &yuv420[w * h..w * h + chroma],
            u_stride: width / 2,
            v_plane: &yuv420[w * h + chroma..],
            v_stride: width / 2,
            width,
            height,
        }),
        width,
        height,
        ChannelOrder::Rgba,
    )?;
    if planar.data.borrow() != yuv420_rgba.data.borrow() {
        warn!("planar and combined 4:2:0 decoders disagree");
    }

    let yuv422_rgba = run(
        "yuv422.png",
        &Conversion::Yuv422Buffer(Yuv422Buffer {
            data: &yuv422,
            width,
            height,
        }),
        width,
        height,
        ChannelOrder::Rgba,
    )?;
    save("yuv422.png", &yuv422_rgba);

    let packed_rgba = run(
        "packed422.png",
        &Conversion::PackedYuv422(PackedYuv422Buffer {
            data: &packed422,
            stride: width * 2,
            width,
            height,
        }),
        width,
        height,
        ChannelOrder::Rgba,
    )?;
    save("packed422.png", &packed_rgba);

    let rgb_rgba = run(
        "packed_rgb.png",
        &Conversion::PackedRgb(PackedRgbBuffer {
            data: &packed_rgb,
            stride: width * 3,
            width,
            height,
        }),
        width,
        height,
        ChannelOrder::Rgba,
    )?;
    save("packed_rgb.png", &rgb_rgba);

    let source = rgb_rgba.to_fixed();
    let grey = run(
        "grey.png",
        &Conversion::RgbToGrey(source.clone()),
        width,
        height,
        ChannelOrder::Luminance,
    )?;
    save("grey.png", &grey);

    for channel in 0..4 {
        let name = format!("channel_{channel}.png");
        let extracted = run(
            &name,
            &Conversion::ExtractChannel {
                src: source.clone(),
                channel,
            },
            width,
            height,
            ChannelOrder::Luminance,
        )?;
        save(&name, &extracted);
    }

    Ok(())
}
