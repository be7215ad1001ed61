
use std::ops::Deref;
use std::path::Path;
use std::process::ExitCode;

use display_error_chain::ErrorChainExt;
use tracing::error;

use fixturegen::{generate, logging, spec};
use fixturegen::logging::ResultExt;


fn main() -> ExitCode {

	// init logging
	let Ok(_) = logging::init("fixturegen=info")
		.log_err()
		else { return ExitCode::FAILURE; };

	let report = match generate::run(Path::new(generate::DEFAULT_OUTPUT_DIR), &spec::default_specs()) {
		Ok(report) => report,
		Err(e) => {
			error!("{}", e.deref().chain());
			return ExitCode::FAILURE;
		}
	};

	// per-file failures were already logged inside the batch, they only pick the exit code here
	if report.failures.is_empty() {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	}
}
