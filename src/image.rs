
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use image::codecs::jpeg::JpegEncoder;
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use tracing::info;

use crate::font::Font;


type Color = Rgb<u8>;


pub struct Image {
	img: RgbImage
}

impl Image {

	pub fn new(width: u32, height: u32) -> Self {
		Self {
			img: RgbImage::new(width, height)
		}
	}

	pub fn width(&self) -> u32 {
		self.img.width()
	}

	pub fn height(&self) -> u32 {
		self.img.height()
	}

	pub fn fill(&mut self, color: Color) {
		for p in self.img.pixels_mut() {
			*p = color;
		}
	}

	pub fn text(&mut self, x: u32, y: u32, color: Color, font: &Font, text: impl AsRef<str>) {
		font.draw(&mut self.img, x, y, color, text.as_ref());
	}

	pub fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Color) {
		draw_filled_ellipse_mut(&mut self.img, (cx, cy), rx, ry, color);
	}

	pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
		draw_filled_rect_mut(&mut self.img, Rect::at(x, y).of_size(w, h), color);
	}

	// NOTE: the vertices must be distinct, the polygon rasterizer
	//       rejects paths whose first and last points coincide
	pub fn fill_triangle(&mut self, a: (i32,i32), b: (i32,i32), c: (i32,i32), color: Color) {
		let points = [
			Point::new(a.0, a.1),
			Point::new(b.0, b.1),
			Point::new(c.0, c.1)
		];
		draw_polygon_mut(&mut self.img, &points, color);
	}

	pub fn save_jpeg(&self, path: impl AsRef<Path>, quality: u8) -> Result<()> {

		let path = path.as_ref();

		let mut file = File::create(path)
			.context(format!("Failed to open file for writing: {}", path.to_string_lossy()))?;
		let mut writer = BufWriter::new(&mut file);

		let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
		self.img.write_with_encoder(encoder)
			.context(format!("Failed to save image to: {}", path.to_string_lossy()))?;

		// write buffers should be flushed before dropping
		writer.flush()
			.context(format!("Failed to flush image file: {}", path.to_string_lossy()))?;

		info!("Saved image: {}", path.to_string_lossy());
		Ok(())
	}
}
