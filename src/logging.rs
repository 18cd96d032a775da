//! Log output for the easypie binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a given `-v` count.
pub fn default_level(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		_ => "debug",
	}
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over the
/// verbosity flag.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

	fmt::Subscriber::builder()
		.with_env_filter(filter)
		.with_target(false)
		.with_ansi(false)
		.with_writer(std::io::stderr)
		.try_init()
}
