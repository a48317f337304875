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
/// Source buffers for every supported layout describing the same gradient.
pub struct SyntheticFrame {
    pub yuv420: Vec<u8>,
    pub yuv422: Vec<u8>,
    pub packed422: Vec<u8>,
    pub packed_rgb: Vec<u8>,
}

fn luma_at(x: usize, y: usize, width: usize, height: usize) -> u8 {
    (16 + (x * 219) / width.max(1) / 2 + (y * 219) / height.max(1) / 2) as u8
}

fn u_at(x: usize, width: usize) -> u8 {
    (16 + (x * 224) / width.max(1)) as u8
}

fn v_at(y: usize, height: usize) -> u8 {
    (240 - (y * 224) / height.max(1)) as u8
}

pub fn gradient_frame(width: u32, height: u32) -> SyntheticFrame {
    let (w, h) = (width as usize, height as usize);
    let (cw, ch) = (w / 2, h / 2);

    let mut yuv420 = vec![0u8; w * h + 2 * cw * ch];
    for y in 0..h {
        for x in 0..w {
            yuv420[x + y * w] = luma_at(x, y, w, h);
        }
    }
    for y in 0..ch {
        for x in 0..cw {
            yuv420[w * h + x + y * cw] = u_at(x * 2, w);
            yuv420[w * h + cw * ch + x + y * cw] = v_at(y * 2, h);
        }
    }

    // Chroma planes are addressed with `(y / 2) * width`, keep them full size
    let mut yuv422 = vec![0u8; 2 * w * h];
    yuv422[..w * h].copy_from_slice(&yuv420[..w * h]);
    for y in 0..h {
        for x in 0..cw {
            yuv422[w * h + x + (y / 2) * w] = u_at(x * 2, w);
            yuv422[w * h + w * (h / 2) + x + (y / 2) * w] = v_at(y - y % 2, h);
        }
    }

    let mut packed422 = vec![0u8; 2 * w * h];
    for y in 0..h {
        for pair in 0..cw {
            let offset = y * w * 2 + pair * 4;
            packed422[offset] = u_at(pair * 2, w);
            packed422[offset + 1] = luma_at(pair * 2, y, w, h);
            packed422[offset + 2] = v_at(y, h);
            packed422[offset + 3] = luma_at(pair * 2 + 1, y, w, h);
        }
    }

    let mut packed_rgb = vec![0u8; 3 * w * h];
    for (i, px) in packed_rgb.chunks_exact_mut(3).enumerate() {
        let (x, y) = (i % w, i / w);
        px[0] = ((x * 255) / w.max(1)) as u8;
        px[1] = ((y * 255) / h.max(1)) as u8;
        px[2] = 128;
    }

    SyntheticFrame {
        yuv420,
        yuv422,
        packed422,
        packed_rgb,
    }
}
