
use image::Rgb;


pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;


/// One synthetic photo: where to write it and what to draw on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
	pub filename: String,
	pub width: u32,
	pub height: u32,
	pub background: Rgb<u8>,
	pub label: String
}

impl ImageSpec {

	pub fn new(filename: impl Into<String>, background: Rgb<u8>, label: impl Into<String>) -> Self {
		Self {
			filename: filename.into(),
			width: DEFAULT_WIDTH,
			height: DEFAULT_HEIGHT,
			background,
			label: label.into()
		}
	}
}


/// the fixture photos, in the order they get generated and reported
pub fn default_specs() -> Vec<ImageSpec> {
	vec![
		ImageSpec::new("photo1.jpg", Rgb([70, 130, 180]), "Photo #1"),
		ImageSpec::new("photo2.jpg", Rgb([220, 120, 80]), "Photo #2"),
		ImageSpec::new("photo3.jpg", Rgb([100, 180, 120]), "Photo #3"),
	]
}
