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
//! Two dimensional work grid and the kernel execution model.
//!
//! Every [ConversionKernel] is executed once per [GlobalId] of a [Grid]. A work item
//! writes only into the destination row matching its `y` coordinate, so rows are
//! handed out exclusively and may run in parallel.
use crate::images::{store_pixel, ImageMut, ImageSample, Pixel};
use crate::yuv_support::ChannelOrder;
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;
use tracing::trace;

/// Coordinate of one work item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GlobalId {
    pub x: u32,
    pub y: u32,
}

/// Extent of a launch in work items.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
}

impl Grid {
    pub const fn new(width: u32, height: u32) -> Self {
        Grid { width, height }
    }

    /// Smallest grid covering the destination when each work item
    /// produces `pixels_per_item` horizontally adjacent pixels.
    pub const fn covering(width: u32, height: u32, pixels_per_item: u32) -> Self {
        Grid {
            width: width.div_ceil(pixels_per_item),
            height,
        }
    }
}

/// Write handle for the destination row of a work item.
///
/// Rows past the destination height are empty, a kernel passing its bounds test
/// never writes into them.
pub struct DestinationRow<'a, T: ImageSample> {
    row: &'a mut [T],
    y: u32,
    width: u32,
    height: u32,
    order: ChannelOrder,
}

impl<T: ImageSample> DestinationRow<'_, T> {
    /// Destination image width.
    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Destination image height.
    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    pub fn y(&self) -> u32 {
        self.y
    }

    /// True when `(x, y)` of this row lies inside the destination.
    #[inline(always)]
    pub fn contains(&self, x: u32) -> bool {
        (x < self.width) & (self.y < self.height)
    }

    #[inline(always)]
    pub fn write_pixel(&mut self, x: u32, pixel: Pixel) {
        let cn = self.order.get_channels_count();
        let start = x as usize * cn;
        store_pixel(&mut self.row[start..start + cn], self.order, pixel);
    }
}

/// One conversion operation executed per work item.
///
/// Implementations perform their own destination bounds test and do nothing
/// for work items outside of it.
pub trait ConversionKernel<T: ImageSample>: Sync {
    const NAME: &'static str;
    /// Horizontally adjacent output pixels produced by one work item.
    const PIXELS_PER_ITEM: u32 = 1;

    fn execute(&self, id: GlobalId, dst: &mut DestinationRow<'_, T>);
}

/// Runs `kernel` for every coordinate of `grid`.
///
/// Grid may be larger or smaller than the destination, extra work items are
/// no-ops and uncovered pixels keep their content. Only the destination store
/// is validated, sources are the kernel's contract.
pub fn dispatch<T: ImageSample, K: ConversionKernel<T>>(
    kernel: &K,
    grid: Grid,
    dst: &mut ImageMut<'_, T>,
) -> Result<(), YuvError> {
    dst.check_constraints()?;

    let width = dst.width;
    let height = dst.height;
    let order = dst.order;
    let stride = dst.stride as usize;

    trace!(
        kernel = K::NAME,
        grid_width = grid.width,
        grid_height = grid.height,
        width,
        height,
        "dispatching conversion kernel"
    );

    let run_row = |(y, row): (usize, &mut [T])| {
        let mut row = DestinationRow {
            row,
            y: y as u32,
            width,
            height,
            order,
        };
        for x in 0..grid.width {
            kernel.execute(GlobalId { x, y: y as u32 }, &mut row);
        }
    };

    let covered_rows = grid.height.min(height) as usize;
    let store = &mut dst.data.borrow_mut()[..covered_rows * stride];

    #[cfg(feature = "rayon")]
    {
        store
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(&run_row);
    }
    #[cfg(not(feature = "rayon"))]
    {
        store.chunks_exact_mut(stride).enumerate().for_each(&run_row);
    }

    for y in height..grid.height {
        let empty: &mut [T] = &mut [];
        run_row((y as usize, empty));
    }

    Ok(())
}

/// Runs `kernel` over the smallest grid covering the destination.
pub fn launch<T: ImageSample, K: ConversionKernel<T>>(
    kernel: &K,
    dst: &mut ImageMut<'_, T>,
) -> Result<(), YuvError> {
    let grid = Grid::covering(dst.width, dst.height, K::PIXELS_PER_ITEM);
    dispatch(kernel, grid, dst)
}
