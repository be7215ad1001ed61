
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use display_error_chain::ErrorChainExt;
use image::Rgb;
use tracing::{error, info, warn};

use crate::font::Font;
use crate::image::Image;
use crate::spec::ImageSpec;


pub const DEFAULT_OUTPUT_DIR: &'static str = "data";

pub const JPEG_QUALITY: u8 = 95;


/// compose one fixture photo: background, centered label, decorative shapes
pub fn create_test_image(spec: &ImageSpec, font: &Font) -> Image {

	let mut img = Image::new(spec.width, spec.height);
	img.fill(spec.background);

	// center the label on the raster
	// labels wider than the raster clamp to the left edge
	let (text_w, text_h) = font.measure(&spec.label);
	let text_x = spec.width.saturating_sub(text_w)/2;
	let text_y = spec.height.saturating_sub(text_h)/2;
	img.text(text_x, text_y, Rgb([255, 255, 255]), font, &spec.label);

	// a few shapes to make the photo more interesting,
	// drawn after the label, at spots relative to the raster size
	let w = spec.width as i32;
	let h = spec.height as i32;
	img.fill_ellipse(100, 100, 50, 50, Rgb([255, 100, 100]));
	img.fill_rect(w - 150, 50, 100, 100, Rgb([100, 255, 100]));
	img.fill_triangle(
		(w/2, h - 150),
		(w/2 - 50, h - 50),
		(w/2 + 50, h - 50),
		Rgb([255, 255, 100])
	);

	img
}


pub struct RunReport {
	pub written: Vec<PathBuf>,
	pub failures: Vec<(String, anyhow::Error)>,
	pub output_dir: PathBuf
}


pub fn run(output_dir: impl AsRef<Path>, specs: &[ImageSpec]) -> Result<RunReport> {

	let output_dir = output_dir.as_ref();

	// nothing can be written without the output folder
	fs::create_dir_all(output_dir)
		.context(format!("Failed to create output folder: {}", output_dir.to_string_lossy()))?;

	let font = Font::resolve();

	let mut report = RunReport {
		written: Vec::with_capacity(specs.len()),
		failures: Vec::new(),
		output_dir: output_dir.to_path_buf()
	};

	for spec in specs {
		let path = output_dir.join(&spec.filename);
		let img = create_test_image(spec, &font);
		match img.save_jpeg(&path, JPEG_QUALITY) {
			Ok(()) => report.written.push(path),
			Err(e) => {
				// keep going: the remaining photos are independent of this one
				error!("Failed to write {}: {}", spec.filename, e.deref().chain());
				report.failures.push((spec.filename.clone(), e));
			}
		}
	}

	info!("{} test images created in {}", report.written.len(), output_dir.to_string_lossy());
	if !report.failures.is_empty() {
		warn!("{} images failed to write", report.failures.len());
	}
	info!("Note: full EXIF metadata needs an extra library (eg the kamadak-exif crate), not used here");

	Ok(report)
}
