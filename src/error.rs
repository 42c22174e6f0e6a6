use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("line {line}: {message}")]
	Parse { line: usize, message: String },

	#[error("cannot compute bounds of an empty point cloud")]
	EmptyCloud,

	#[error("grid size must be at least 1, got {0}")]
	InvalidGridSize(u32),
}

pub type GridResult<T> = Result<T, GridError>;
