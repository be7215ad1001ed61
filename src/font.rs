
use std::fs;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::debug;

use crate::glyphs;


/// labels render at this pixel size when a scalable font is available
const POINT_SIZE: f32 = 40.0;

// well-known font locations, tried in order
const CANDIDATES: [&'static str; 6] = [
	"/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
	"/usr/share/fonts/dejavu/DejaVuSans.ttf",
	"/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
	"/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
	"/usr/share/fonts/truetype/freefont/FreeSans.ttf",
	"/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
];


/// The font labels get drawn with, picked once per run.
/// When no scalable font can be loaded, label rendering degrades to the
/// built-in bitmap glyphs instead of failing the run.
pub enum Font {
	Scalable(FontVec),
	Bitmap
}

impl Font {

	pub fn resolve() -> Font {
		Self::resolve_from(CANDIDATES)
	}

	pub fn resolve_from(paths: impl IntoIterator<Item=impl AsRef<Path>>) -> Font {

		for path in paths {
			let path = path.as_ref();
			match Self::load(path) {
				Ok(font) => {
					debug!("using scalable font: {}", path.to_string_lossy());
					return Font::Scalable(font);
				}
				// missing or unreadable candidate: try the next one
				Err(_) => continue
			}
		}

		debug!("no scalable font available, using the built-in bitmap font");
		Font::Bitmap
	}

	fn load(path: &Path) -> Result<FontVec> {
		let bytes = fs::read(path)
			.context(format!("Failed to read font file: {}", path.to_string_lossy()))?;
		FontVec::try_from_vec(bytes)
			.context(format!("Failed to parse font file: {}", path.to_string_lossy()))
	}

	/// bounding box of a rendered label, in pixels: ("", _) measures to (0, 0)
	pub fn measure(&self, text: impl AsRef<str>) -> (u32, u32) {
		match self {
			Font::Scalable(font) => {
				let (w, h) = text_size(PxScale::from(POINT_SIZE), font, text.as_ref());
				(w.max(0) as u32, h.max(0) as u32)
			}
			Font::Bitmap => glyphs::measure(text.as_ref())
		}
	}

	pub fn draw(&self, img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>, text: impl AsRef<str>) {
		match self {
			Font::Scalable(font) => draw_text_mut(
				img,
				color,
				x as i32,
				y as i32,
				PxScale::from(POINT_SIZE),
				font,
				text.as_ref()
			),
			Font::Bitmap => glyphs::draw(img, x, y, color, text.as_ref())
		}
	}
}
