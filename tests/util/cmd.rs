
use assert_cmd::assert::Assert;
use assert_cmd::Command;


const BIN_NAME: &'static str = "fixturegen";


pub fn cmd() -> Command {
	Command::cargo_bin(BIN_NAME)
		.unwrap()
}


pub trait AssertExt {
	fn print_output(self) -> Self;
}

impl AssertExt for Assert {

	fn print_output(self) -> Self {
		let output = self.get_output();
		println!("STDOUT:\n{}", String::from_utf8_lossy(&output.stdout));
		println!("STDERR:\n{}", String::from_utf8_lossy(&output.stderr));
		self
	}
}
