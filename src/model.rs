use std::fmt;

use crate::probe::CommandBuilder;

/// Round-trip summary of a single probe, in milliseconds.
///
/// All three values are absent when the probe failed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProbeResult {
	pub min_ms: Option<f64>,
	pub avg_ms: Option<f64>,
	pub max_ms: Option<f64>,
}

impl ProbeResult {
	pub fn measured(min_ms: f64, avg_ms: f64, max_ms: f64) -> Self {
		Self {
			min_ms: Some(min_ms),
			avg_ms: Some(avg_ms),
			max_ms: Some(max_ms),
		}
	}

	pub fn absent() -> Self {
		Self::default()
	}

	pub fn is_absent(&self) -> bool {
		self.min_ms.is_none() && self.avg_ms.is_none() && self.max_ms.is_none()
	}
}

impl fmt::Display for ProbeResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.min_ms, self.avg_ms, self.max_ms) {
			(Some(min), Some(avg), Some(max)) => write!(f, "{}/{}/{} ms", min, avg, max),
			_ => write!(f, "no response"),
		}
	}
}

/// One hostname paired with its probe outcome
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
	pub host: String,
	pub result: ProbeResult,
}

/// Probe configuration
#[derive(Debug, Clone)]
pub struct ProbeConfig {
	pub program: String,
	pub command: CommandBuilder,
	pub jobs: usize,
}
