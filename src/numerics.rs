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
#![forbid(unsafe_code)]
use crate::images::Pixel;
use crate::yuv_support::*;

#[inline(always)]
/// Normalizes 8-bit sample into [0, 1]
pub(crate) fn normalize_u8(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline(always)]
/// Rescales studio range luma so that 16 maps to 0 and 235 maps to 1
pub(crate) fn studio_luma(y: u8) -> f32 {
    Y_SCALE * (normalize_u8(y) - Y_BIAS)
}

#[inline(always)]
pub(crate) fn centered_chroma(c: u8) -> f32 {
    normalize_u8(c) - CHROMA_BIAS
}

/// Weighted luma of RGB components, alpha is ignored.
#[inline]
pub fn rgb_to_grey(pixel: Pixel) -> f32 {
    pixel.r() * GREY_R_WEIGHT + pixel.g() * GREY_G_WEIGHT + pixel.b() * GREY_B_WEIGHT
}

/// Converts one 8-bit studio range YUV sample into normalized RGBA.
///
/// `u` is the chroma sample stored first by every supported layout, `v` the second one.
/// Result is not clamped, alpha is always opaque.
#[inline]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> Pixel {
    yuv_to_rgb_scaled(studio_luma(y), centered_chroma(u), centered_chroma(v))
}

/// Same as [yuv_to_rgb] for already rescaled luma and recentered chroma.
///
/// Packed layouts share chroma between two luma samples, so chroma is
/// recentered once per group.
#[inline(always)]
pub(crate) fn yuv_to_rgb_scaled(y: f32, u: f32, v: f32) -> Pixel {
    Pixel::new(
        y + V_TO_R * v,
        y - U_TO_G * u - V_TO_G * v,
        y + U_TO_B * u,
        OPAQUE_ALPHA,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_grey_weights() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let r: f32 = rng.random_range(0.0..1.0);
            let g: f32 = rng.random_range(0.0..1.0);
            let b: f32 = rng.random_range(0.0..1.0);
            let grey = rgb_to_grey(Pixel::new(r, g, b, rng.random_range(0.0..1.0)));
            let expected = 0.299 * r + 0.587 * g + 0.114 * b;
            assert!((grey - expected).abs() < 1e-6, "{grey} vs {expected}");
        }
    }

    #[test]
    fn test_grey_is_invariant() {
        for c in 0..=255u8 {
            let c = normalize_u8(c);
            let grey = rgb_to_grey(Pixel::new(c, c, c, 1.0));
            assert!((grey - c).abs() < 1e-6, "{grey} vs {c}");
        }
    }

    #[test]
    fn test_grey_is_linear() {
        let a = Pixel::new(0.2, 0.4, 0.6, 1.0);
        let b = Pixel::new(0.1, 0.3, 0.05, 1.0);
        let sum = Pixel::new(0.3, 0.7, 0.65, 1.0);
        let diff = rgb_to_grey(sum) - (rgb_to_grey(a) + rgb_to_grey(b));
        assert!(diff.abs() < 1e-6);
    }

    #[test]
    fn test_achromatic_point() {
        let p = yuv_to_rgb(235, 128, 128);
        assert!((p.r() - 1.0).abs() < 1e-2, "r {}", p.r());
        assert!((p.g() - 1.0).abs() < 1e-2, "g {}", p.g());
        assert!((p.b() - 1.0).abs() < 1e-2, "b {}", p.b());
        assert_eq!(p.a(), 1.0);
    }

    #[test]
    fn test_black_point() {
        let p = yuv_to_rgb(16, 128, 128);
        assert!(p.r().abs() < 1e-2);
        assert!(p.g().abs() < 1e-2);
        assert!(p.b().abs() < 1e-2);
    }

    #[test]
    fn test_chroma_roles() {
        // Only the second chroma sample drives red, only the first one drives blue.
        let neutral = yuv_to_rgb(128, 128, 128);
        let more_v = yuv_to_rgb(128, 128, 200);
        let more_u = yuv_to_rgb(128, 200, 128);
        assert!(more_v.r() > neutral.r());
        assert!((more_v.b() - neutral.b()).abs() < 1e-6);
        assert!(more_u.b() > neutral.b());
        assert!((more_u.r() - neutral.r()).abs() < 1e-6);
        assert!(more_u.g() < neutral.g());
        assert!(more_v.g() < neutral.g());
    }

    #[test]
    fn test_reference_value() {
        let y = 1.1643f32 * (81. / 255. - 0.0625);
        let u = 90. / 255. - 0.5f32;
        let v = 240. / 255. - 0.5f32;
        let p = yuv_to_rgb(81, 90, 240);
        assert!((p.r() - (y + 1.5958 * v)).abs() < 1e-6);
        assert!((p.g() - (y - 0.39173 * u - 0.81290 * v)).abs() < 1e-6);
        assert!((p.b() - (y + 2.017 * u)).abs() < 1e-6);
    }
}
