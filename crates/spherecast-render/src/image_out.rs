//! Serialization of a rendered framebuffer.
//!
//! The primary format is the ASCII pixel map:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <r> <g> <b> <r> <g> <b> ...
//! ```
//!
//! Triples are space separated with one image row per line; each row keeps
//! its trailing space.

use crate::error::Result;
use crate::integrator::Framebuffer;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::{Cursor, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    /// `.png` selects PNG, anything else falls back to the pixel map.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => Self::Png,
            _ => Self::Ppm,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Ppm => "ppm",
            Self::Png => "png",
        }
    }
}

pub fn write_ppm<W: Write>(mut out: W, frame: &Framebuffer) -> Result<()> {
    write!(out, "P3\n{} {}\n255\n", frame.width(), frame.height())?;
    if frame.width() > 0 {
        for row in frame.pixels().chunks(frame.width() as usize) {
            for [r, g, b] in row {
                write!(out, "{r} {g} {b} ")?;
            }
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn to_rgb_image(frame: &Framebuffer) -> RgbImage {
    RgbImage::from_fn(frame.width(), frame.height(), |x, y| Rgb(frame.pixel(x, y)))
}

/// Encodes `frame` in memory so callers can hand the bytes to a single
/// write of the destination file.
pub fn encode(frame: &Framebuffer, format: OutputFormat) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    match format {
        OutputFormat::Ppm => write_ppm(&mut bytes, frame)?,
        OutputFormat::Png => {
            to_rgb_image(frame).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?
        }
    }
    Ok(bytes)
}
