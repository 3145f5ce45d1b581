use thiserror::Error;

/// Per-host probe failures. None of these abort the batch.
#[derive(Debug, Error)]
pub enum ProbeError {
	#[error("failed to start '{program}': {source}")]
	Spawn {
		program: String,
		#[source]
		source: std::io::Error,
	},

	#[error("ping exited with {status}:\n{stderr}")]
	NonZeroExit { status: String, stderr: String },

	#[error("no min/avg/max summary found in ping output")]
	UnexpectedOutput,
}
