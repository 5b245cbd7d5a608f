//! Buffer length computation and pixel depth conversion.
//!
//! All buffers are tightly packed, row-major, top-to-bottom and
//! left-to-right with no row padding.

use crate::image_pipeline::common::error::{ImageError, LayoutError, Result};
use crate::image_pipeline::layout::types::PixelDepth;

/// Number of bytes a `width` x `height` image occupies in `depth`.
pub fn calculate_image_length(width: u16, height: u16, depth: PixelDepth) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(depth.bytes_per_pixel()))
        .ok_or(ImageError::InvalidDimensions(width as usize, height as usize))
}

/// Whether `remap` defines a rule from `from` to `to`.
///
/// Color to luminance is missing on purpose: it needs luminance weights.
pub fn can_remap(from: PixelDepth, to: PixelDepth) -> bool {
    from == to || !(from.base_type().is_color() && !to.base_type().is_color())
}

/// Converts `width` x `height` pixels of `src` in `src_depth` into `dst` in `dst_depth`.
///
/// Both slices may be longer than the image; trailing bytes are left alone.
pub fn remap(
    src: &[u8],
    dst: &mut [u8],
    width: u16,
    height: u16,
    src_depth: PixelDepth,
    dst_depth: PixelDepth,
) -> Result<()> {
    if !can_remap(src_depth, dst_depth) {
        return Err(LayoutError::UnsupportedRemap {
            from: src_depth,
            to: dst_depth,
        }
        .into());
    }

    let src_len = calculate_image_length(width, height, src_depth)?;
    let dst_len = calculate_image_length(width, height, dst_depth)?;
    if src.len() < src_len {
        return Err(LayoutError::BufferTooSmall {
            needed: src_len,
            actual: src.len(),
        }
        .into());
    }
    if dst.len() < dst_len {
        return Err(LayoutError::BufferTooSmall {
            needed: dst_len,
            actual: dst.len(),
        }
        .into());
    }

    if src_depth == dst_depth {
        dst[..dst_len].copy_from_slice(&src[..src_len]);
        return Ok(());
    }

    let src_pixels = src[..src_len].chunks_exact(src_depth.bytes_per_pixel());
    let dst_pixels = dst[..dst_len].chunks_exact_mut(dst_depth.bytes_per_pixel());
    for (from, to) in src_pixels.zip(dst_pixels) {
        pack(dst_depth, unpack(src_depth, from), to);
    }

    Ok(())
}

/// Expands one stored pixel to 8-bit RGBA.
///
/// Luminance is broadcast to R, G and B; missing alpha reads as opaque.
fn unpack(depth: PixelDepth, px: &[u8]) -> [u8; 4] {
    match depth {
        PixelDepth::Rgba8 => [px[0], px[1], px[2], px[3]],
        PixelDepth::Rgb8 => [px[0], px[1], px[2], 0xFF],
        PixelDepth::LuminanceAlpha8 => [px[0], px[0], px[0], px[1]],
        PixelDepth::Luminance8 => [px[0], px[0], px[0], 0xFF],
        PixelDepth::Rgba4 => {
            let v = u16::from_le_bytes([px[0], px[1]]);
            [
                expand4((v >> 12) as u8),
                expand4((v >> 8) as u8),
                expand4((v >> 4) as u8),
                expand4(v as u8),
            ]
        }
        PixelDepth::Rgb5A1 => {
            let v = u16::from_le_bytes([px[0], px[1]]);
            [
                expand5((v >> 11) as u8),
                expand5((v >> 6) as u8),
                expand5((v >> 1) as u8),
                if v & 1 == 1 { 0xFF } else { 0 },
            ]
        }
        PixelDepth::Rgb565 => {
            let v = u16::from_le_bytes([px[0], px[1]]);
            [
                expand5((v >> 11) as u8),
                expand6((v >> 5) as u8),
                expand5(v as u8),
                0xFF,
            ]
        }
    }
}

/// Stores an 8-bit RGBA pixel in `depth`, dropping channels the depth lacks.
fn pack(depth: PixelDepth, [r, g, b, a]: [u8; 4], out: &mut [u8]) {
    match depth {
        PixelDepth::Rgba8 => out.copy_from_slice(&[r, g, b, a]),
        PixelDepth::Rgb8 => out.copy_from_slice(&[r, g, b]),
        PixelDepth::LuminanceAlpha8 => out.copy_from_slice(&[r, a]),
        PixelDepth::Luminance8 => out[0] = r,
        PixelDepth::Rgba4 => {
            let v = (u16::from(r >> 4) << 12)
                | (u16::from(g >> 4) << 8)
                | (u16::from(b >> 4) << 4)
                | u16::from(a >> 4);
            out.copy_from_slice(&v.to_le_bytes());
        }
        PixelDepth::Rgb5A1 => {
            let v = (u16::from(r >> 3) << 11)
                | (u16::from(g >> 3) << 6)
                | (u16::from(b >> 3) << 1)
                | u16::from(a >> 7);
            out.copy_from_slice(&v.to_le_bytes());
        }
        PixelDepth::Rgb565 => {
            let v = (u16::from(r >> 3) << 11) | (u16::from(g >> 2) << 5) | u16::from(b >> 3);
            out.copy_from_slice(&v.to_le_bytes());
        }
    }
}

fn expand4(v: u8) -> u8 {
    let v = v & 0x0F;
    (v << 4) | v
}

fn expand5(v: u8) -> u8 {
    let v = v & 0x1F;
    (v << 3) | (v >> 2)
}

fn expand6(v: u8) -> u8 {
    let v = v & 0x3F;
    (v << 2) | (v >> 4)
}
