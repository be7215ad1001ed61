
mod util;


use std::fs;

use galvanic_assert::{assert_that, matchers::*};
use image::{GenericImageView, Rgb};

use fixturegen::font::Font;
use fixturegen::generate::{self, create_test_image, JPEG_QUALITY};
use fixturegen::logging;
use fixturegen::spec::{default_specs, ImageSpec, DEFAULT_HEIGHT, DEFAULT_WIDTH};

use crate::util::out_dir::OutDir;


#[test]
fn default_batch() {
	let _logging = logging::init_test();

	let out = OutDir::new();
	let report = generate::run(out.data(), &default_specs())
		.expect("Failed to run the generator");
	out.print();

	assert_that!(&report.written.len(), eq(3));
	assert_that!(&report.failures.len(), eq(0));
	assert_that!(&report.output_dir, eq(out.data()));

	for filename in ["photo1.jpg", "photo2.jpg", "photo3.jpg"] {
		let path = out.photo(filename);

		let len = fs::metadata(&path)
			.expect("Missing output file")
			.len();
		assert_that!(&(len > 0), eq(true));

		// the file should decode as a full-size image
		let img = image::open(&path)
			.expect("Failed to decode output file");
		assert_that!(&img.dimensions(), eq((DEFAULT_WIDTH, DEFAULT_HEIGHT)));
	}
}


#[test]
fn run_twice_overwrites() {
	let _logging = logging::init_test();

	let out = OutDir::new();
	generate::run(out.data(), &default_specs())
		.expect("Failed to run the generator");
	let report = generate::run(out.data(), &default_specs())
		.expect("Failed to run the generator again");

	assert_that!(&report.written.len(), eq(3));
	assert_that!(&report.failures.len(), eq(0));

	let img = image::open(out.photo("photo2.jpg"))
		.expect("Failed to decode output file");
	assert_that!(&img.dimensions(), eq((DEFAULT_WIDTH, DEFAULT_HEIGHT)));
}


#[test]
fn creates_missing_parents() {
	let _logging = logging::init_test();

	let out = OutDir::new();
	let deep = out.as_ref().join("deeply").join("nested").join("data");
	let specs = [ImageSpec::new("photo.jpg", Rgb([70, 130, 180]), "Photo")];

	let report = generate::run(&deep, &specs)
		.expect("Failed to run the generator");

	assert_that!(&report.written.len(), eq(1));
	assert_that!(&deep.join("photo.jpg").is_file(), eq(true));
}


#[test]
fn empty_label() {
	let _logging = logging::init_test();

	let out = OutDir::new();
	let specs = [ImageSpec::new("blank.jpg", Rgb([100, 180, 120]), "")];

	let report = generate::run(out.data(), &specs)
		.expect("Failed to run the generator");

	assert_that!(&report.written.len(), eq(1));
	let img = image::open(out.photo("blank.jpg"))
		.expect("Failed to decode output file");
	assert_that!(&img.dimensions(), eq((DEFAULT_WIDTH, DEFAULT_HEIGHT)));
}


#[test]
fn bitmap_font_fallback() {
	let _logging = logging::init_test();

	// no loadable candidates, so resolution has to pick the built-in font
	let font = Font::resolve_from(["/nowhere/missing-font.ttf"]);
	assert!(matches!(&font, Font::Bitmap));
	assert_that!(&font.measure(""), eq((0u32, 0u32)));

	let spec = ImageSpec::new("fallback.jpg", Rgb([220, 120, 80]), "Photo #1");
	let img = create_test_image(&spec, &font);
	assert_that!(&img.width(), eq(DEFAULT_WIDTH));
	assert_that!(&img.height(), eq(DEFAULT_HEIGHT));

	let out = OutDir::new();
	fs::create_dir_all(out.data())
		.expect("Failed to make output folder");
	img.save_jpeg(out.photo("fallback.jpg"), JPEG_QUALITY)
		.expect("Failed to save image");

	let decoded = image::open(out.photo("fallback.jpg"))
		.expect("Failed to decode output file");
	assert_that!(&decoded.dimensions(), eq((DEFAULT_WIDTH, DEFAULT_HEIGHT)));
}
