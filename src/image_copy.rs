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
use crate::images::{Image, ImageMut, ImageSample};
use crate::YuvError;

/// Nearest neighbor copy between images of any sample type and channel order.
pub struct CopyImageKernel<'a, S: ImageSample> {
    src: Image<'a, S>,
}

impl<'a, S: ImageSample> CopyImageKernel<'a, S> {
    pub fn new(src: &Image<'a, S>) -> Self {
        Self { src: src.clone() }
    }
}

impl<S: ImageSample, D: ImageSample> ConversionKernel<D> for CopyImageKernel<'_, S> {
    const NAME: &'static str = "convert_i_rgba_i_rgba";

    #[inline]
    fn execute(&self, id: GlobalId, dst: &mut DestinationRow<'_, D>) {
        if dst.contains(id.x) {
            dst.write_pixel(id.x, self.src.read_nearest(id.x, id.y));
        }
    }
}

/// Copies image into destination with implicit format conversion.
///
/// No scaling is performed, only destination extent is written, source reads
/// outside of the source are clamped to its edge.
///
/// # Arguments
///
/// * `src` - Source image.
/// * `dst` - Destination image, any sample type and channel order.
///
pub fn copy_image<S: ImageSample, D: ImageSample>(
    src: &Image<S>,
    dst: &mut ImageMut<D>,
) -> Result<(), YuvError> {
    src.check_constraints()?;
    launch(&CopyImageKernel::new(src), dst)
}
