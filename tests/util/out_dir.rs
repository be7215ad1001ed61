
use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::TempDir;


/// a scratch folder holding one run's `data/` output
pub struct OutDir {
	dir: TempDir
}

impl OutDir {

	pub fn new() -> OutDir {
		Self {
			dir: TempDir::new()
				.expect("Failed to make temp folder")
		}
	}

	pub fn data(&self) -> PathBuf {
		self.dir.path().join("data")
	}

	pub fn photo(&self, filename: impl AsRef<Path>) -> PathBuf {
		self.data().join(filename.as_ref())
	}

	pub fn print(&self) {
		let path = self.data();
		println!("Output folder: {}", path.to_string_lossy());
		let Ok(dir) = fs::read_dir(&path)
			else {
				println!("\t(missing)");
				return;
			};
		for entry in dir {
			match entry {
				Ok(entry) => println!("\t{}", entry.file_name().to_string_lossy()),
				Err(e) => println!("\tError: {}", e)
			}
		}
	}
}

impl AsRef<Path> for OutDir {
	fn as_ref(&self) -> &Path {
		self.dir.path()
	}
}
