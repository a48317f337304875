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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Pre-launch validation failures.
///
/// Kernels themselves never fail, these are reported only by host entry points
/// before any work item is executed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum YuvError {
    DestinationSizeMismatch(MismatchedSize),
    MinimumDestinationSizeMismatch(MismatchedSize),
    SourceSizeMismatch(MismatchedSize),
    MinimumStrideMismatch(MismatchedSize),
    DestinationExtentMismatch(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::MinimumDestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source buffer must have at least {} elements, but it has {}",
                size.expected, size.received
            )),
            YuvError::MinimumStrideMismatch(size) => f.write_fmt(format_args!(
                "Stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::DestinationExtentMismatch(size) => f.write_fmt(format_args!(
                "Destination extent {} exceeds source extent {}",
                size.expected, size.received
            )),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, YuvError> {
    check_overflow_v2(check_overflow_v2(v0, v1)?, v2)
}

#[inline]
pub(crate) fn check_base_size(width: u32, height: u32) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    Ok(())
}

/// Checks a strided store of `channels` elements per pixel.
///
/// Store must be exactly `stride * height` long and a row must fit into the stride.
#[inline]
pub(crate) fn check_image_store(
    len: usize,
    stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), YuvError> {
    check_base_size(width, height)?;
    let row_size = check_overflow_v2(width as usize, channels)?;
    let full_size = check_overflow_v2(stride as usize, height as usize)?;
    if (stride as usize) < row_size {
        return Err(YuvError::MinimumDestinationSizeMismatch(MismatchedSize {
            expected: row_size * height as usize,
            received: full_size,
        }));
    }
    if len != full_size {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: full_size,
            received: len,
        }));
    }
    Ok(())
}

/// Checks that a source plane holds at least `rows` rows of `stride` elements,
/// the last row only needs `row_size` elements.
#[inline]
pub(crate) fn check_source_plane(
    len: usize,
    stride: usize,
    row_size: usize,
    rows: usize,
) -> Result<(), YuvError> {
    if stride < row_size {
        return Err(YuvError::MinimumStrideMismatch(MismatchedSize {
            expected: row_size,
            received: stride,
        }));
    }
    if rows == 0 {
        return Ok(());
    }
    let required = check_overflow_v2(stride, rows - 1)?
        .checked_add(row_size)
        .ok_or(YuvError::PointerOverflow)?;
    check_source_len(len, required)
}

/// Decoders address the source with destination coordinates, so the destination
/// must not be wider or taller than the source frame.
#[inline]
pub(crate) fn check_destination_extent(
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Result<(), YuvError> {
    if dst_width > src_width {
        return Err(YuvError::DestinationExtentMismatch(MismatchedSize {
            expected: dst_width as usize,
            received: src_width as usize,
        }));
    }
    if dst_height > src_height {
        return Err(YuvError::DestinationExtentMismatch(MismatchedSize {
            expected: dst_height as usize,
            received: src_height as usize,
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_source_len(len: usize, required: usize) -> Result<(), YuvError> {
    if len < required {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected: required,
            received: len,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_store_exact_size() {
        assert_eq!(check_image_store(4 * 3 * 2, 12, 3, 2, 4), Ok(()));
        assert_eq!(
            check_image_store(20, 12, 3, 2, 4),
            Err(YuvError::DestinationSizeMismatch(MismatchedSize {
                expected: 24,
                received: 20
            }))
        );
    }

    #[test]
    fn test_image_store_short_stride() {
        assert!(matches!(
            check_image_store(22, 11, 3, 2, 4),
            Err(YuvError::MinimumDestinationSizeMismatch(_))
        ));
    }

    #[test]
    fn test_zero_size() {
        assert_eq!(check_image_store(0, 0, 0, 4, 1), Err(YuvError::ZeroBaseSize));
    }

    #[test]
    fn test_source_plane_last_row_may_be_short() {
        assert_eq!(check_source_plane(10 + 4, 10, 4, 2), Ok(()));
        assert_eq!(
            check_source_plane(13, 10, 4, 2),
            Err(YuvError::SourceSizeMismatch(MismatchedSize {
                expected: 14,
                received: 13
            }))
        );
        assert!(matches!(
            check_source_plane(100, 3, 4, 2),
            Err(YuvError::MinimumStrideMismatch(_))
        ));
    }

    #[test]
    fn test_destination_extent() {
        assert_eq!(check_destination_extent(8, 6, 8, 6), Ok(()));
        assert_eq!(check_destination_extent(8, 6, 1, 1), Ok(()));
        assert_eq!(
            check_destination_extent(8, 6, 8, 7),
            Err(YuvError::DestinationExtentMismatch(MismatchedSize {
                expected: 7,
                received: 6
            }))
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            check_overflow_v3(usize::MAX, 2, 1),
            Err(YuvError::PointerOverflow)
        );
    }

    #[test]
    fn test_display() {
        let e = YuvError::SourceSizeMismatch(MismatchedSize {
            expected: 5,
            received: 3,
        });
        assert_eq!(
            e.to_string(),
            "Source buffer must have at least 5 elements, but it has 3"
        );
    }
}
