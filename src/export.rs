//! PNG export of rendered dashboard cards.
//!
//! The app asks eframe for a viewport screenshot, crops the requesting
//! card's rectangle out of the returned frame, and writes a PNG wherever
//! the save dialog pointed. Failures are logged by the caller and dropped:
//! the user sees no error surface and there is nothing to retry.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use eframe::egui::{ColorImage, Rect};
use thiserror::Error;

/// A card capture waiting for the next frame's screenshot event.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Screen rectangle of the card at request time, in points.
    pub region: Rect,
    /// Destination chosen in the save dialog.
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("captured frame is empty")]
    EmptyCapture,
    #[error("captured region has no pixels")]
    EmptyRegion,
    #[error("pixel buffer does not match a {0}x{1} image")]
    SizeMismatch(usize, usize),
}

/// Ask for a destination path, pre-filled with the card's slug. `None`
/// when the user cancels the dialog.
pub fn prompt_for_path(slug: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Export chart as PNG")
        .set_file_name(format!("{slug}.png"))
        .add_filter("PNG image", &["png"])
        .save_file()
}

/// Crop `frame` to the request's region and write it as a PNG.
pub fn save_region(frame: &ColorImage, pixels_per_point: f32, request: &ExportRequest) -> Result<()> {
    if frame.pixels.is_empty() {
        return Err(ExportError::EmptyCapture.into());
    }

    let cropped = frame.region(&request.region, Some(pixels_per_point));
    let [width, height] = cropped.size;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyRegion.into());
    }

    let bytes: Vec<u8> = cropped.pixels.iter().flat_map(|c| c.to_array()).collect();
    let png = image::RgbaImage::from_raw(width as u32, height as u32, bytes)
        .ok_or(ExportError::SizeMismatch(width, height))?;
    png.save(&request.path)
        .with_context(|| format!("writing {}", request.path.display()))?;

    Ok(())
}
