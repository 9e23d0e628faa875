use std::fs;
use std::path::{Path, PathBuf};

use bmpvox_mesh::SliceMask;
use image::RgbImage;

use crate::error::IoError;

/// Grey-level cut applied to every pixel.
///
/// A pixel's grey level is the integer mean of its red, green and blue
/// channels. It is solid when above `level`; with `negate` set, levels below
/// `level` are solid as well, so only pixels exactly at `level` stay empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Threshold {
    pub level: i16,
    pub negate: bool,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            level: 128,
            negate: false,
        }
    }
}

impl Threshold {
    #[inline]
    pub fn is_active(&self, grey: i16) -> bool {
        grey > self.level || (self.negate && grey < self.level)
    }

    #[inline]
    pub fn grey([r, g, b]: [u8; 3]) -> i16 {
        ((r as i16) + (g as i16) + (b as i16)) / 3
    }
}

/// Sorted `.bmp` files directly under `dir`.
pub fn list_slices(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::MissingInput(dir.to_path_buf()));
    }
    let entries = fs::read_dir(dir).map_err(|source| IoError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut out = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_bmp = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("bmp"));
        if is_bmp && path.is_file() {
            out.push(path);
        }
    }
    if out.is_empty() {
        return Err(IoError::NoSlices(dir.to_path_buf()));
    }
    out.sort();
    log::info!(target: "slices", "found {} bitmap(s) in {:?}", out.len(), dir);
    Ok(out)
}

/// Width and height of the bitmap at `path`, read from its header.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), IoError> {
    image::image_dimensions(path).map_err(|source| IoError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn mask_from_rgb(img: &RgbImage, threshold: Threshold) -> SliceMask {
    SliceMask::from_fn(img.width(), img.height(), |x, y| {
        threshold.is_active(Threshold::grey(img.get_pixel(x, y).0))
    })
}

/// Decodes one slice and thresholds it. Row 0 is the top row of the image.
pub fn load_slice(path: &Path, threshold: Threshold) -> Result<SliceMask, IoError> {
    let img = image::open(path)
        .map_err(|source| IoError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    Ok(mask_from_rgb(&img, threshold))
}
