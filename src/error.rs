use std::path::PathBuf;

/// Library-level structured errors for easypie.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum EasyPieError {
	#[error("Failed to read options store: {path}")]
	StoreReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse options store: {path}")]
	StoreParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to encode options store: {path}")]
	StoreEncodeError {
		path: PathBuf,
		#[source]
		source: toml::ser::Error,
	},

	#[error("Failed to write options store: {path}")]
	StoreWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid attribute assignment: {input} (expected KEY=VALUE)")]
	InvalidAssignment { input: String },

	#[error("Failed to read content: {path}")]
	ContentReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to resolve user config directory")]
	ConfigDirectoryNotFound,
}

/// Result type alias using EasyPieError.
pub type Result<T> = std::result::Result<T, EasyPieError>;
