use std::process::Stdio;
use std::sync::{Arc, OnceLock};

use colored::Colorize;
use regex::Regex;
use tokio::process::Command;
use tokio::sync::Semaphore;

use crate::error::ProbeError;
use crate::model::{ProbeConfig, ProbeResult, ResultRow};

/// Number of echo requests sent per host
pub const ECHO_COUNT: u32 = 4;

/// Builds the native ping invocation for one platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandBuilder {
	/// Linux, BSD, macOS, BusyBox: `ping -c <count> <host>`
	PosixPing,
	/// Windows: `ping -n <count> <host>`
	WindowsPing,
}

impl CommandBuilder {
	/// Select the builder for the platform this binary was compiled for.
	pub fn native() -> Self {
		if cfg!(windows) {
			CommandBuilder::WindowsPing
		} else {
			CommandBuilder::PosixPing
		}
	}

	/// Argument list for probing `host` with `ECHO_COUNT` echoes.
	pub fn args(&self, host: &str) -> Vec<String> {
		let count_flag = match self {
			CommandBuilder::PosixPing => "-c",
			CommandBuilder::WindowsPing => "-n",
		};
		vec![count_flag.to_string(), ECHO_COUNT.to_string(), host.to_string()]
	}

	/// Extract the RTT summary from captured ping stdout.
	///
	/// Every flavor accepts the `<min>/<avg>/<max>` decimal triple. Windows
	/// also accepts the English `Minimum = Xms, Maximum = Yms, Average = Zms` line.
	pub fn parse_summary(&self, stdout: &str) -> Option<ProbeResult> {
		parse_rtt_triple(stdout).or_else(|| match self {
			CommandBuilder::WindowsPing => parse_windows_summary(stdout),
			CommandBuilder::PosixPing => None,
		})
	}
}

fn rtt_triple_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		Regex::new(r"(\d+\.\d+)/(\d+\.\d+)/(\d+\.\d+)").expect("RTT triple pattern is valid")
	})
}

fn windows_summary_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		Regex::new(r"Minimum\s*=\s*(\d+)ms,\s*Maximum\s*=\s*(\d+)ms,\s*Average\s*=\s*(\d+)ms")
			.expect("Windows summary pattern is valid")
	})
}

/// Find the first `<min>/<avg>/<max>` triple in ping output.
///
/// Input is the full stdout of a ping run. iputils prints
/// `rtt min/avg/max/mdev = a/b/c/d ms`; the first three numbers are taken, so
/// the trailing mdev is ignored.
pub fn parse_rtt_triple(text: &str) -> Option<ProbeResult> {
	let caps = rtt_triple_regex().captures(text)?;
	let min = caps[1].parse::<f64>().ok()?;
	let avg = caps[2].parse::<f64>().ok()?;
	let max = caps[3].parse::<f64>().ok()?;
	Some(ProbeResult::measured(min, avg, max))
}

/// Parse the Windows statistics line, which lists min, max, then average.
fn parse_windows_summary(text: &str) -> Option<ProbeResult> {
	let caps = windows_summary_regex().captures(text)?;
	let min = caps[1].parse::<f64>().ok()?;
	let max = caps[2].parse::<f64>().ok()?;
	let avg = caps[3].parse::<f64>().ok()?;
	Some(ProbeResult::measured(min, avg, max))
}

/// Run the native ping against one host and parse its summary.
pub async fn probe_host(host: &str, config: &ProbeConfig) -> Result<ProbeResult, ProbeError> {
	let output = Command::new(&config.program)
		.args(config.command.args(host))
		.stdin(Stdio::null())
		.output()
		.await
		.map_err(|source| ProbeError::Spawn {
			program: config.program.clone(),
			source,
		})?;

	if !output.status.success() {
		return Err(ProbeError::NonZeroExit {
			status: output.status.to_string(),
			stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
		});
	}

	let stdout = String::from_utf8_lossy(&output.stdout);
	config.command.parse_summary(&stdout)
		.ok_or(ProbeError::UnexpectedOutput)
}

/// Probe one host, reporting any failure and returning an absent result for it.
pub async fn ping_host(host: &str, config: &ProbeConfig) -> ProbeResult {
	match probe_host(host, config).await {
		Ok(result) => result,
		Err(e) => {
			let message = format!("ping {} caused an error: {}", host, e);
			eprintln!("{}", message.red().bold());
			ProbeResult::absent()
		}
	}
}

/// Probe every host and return one row per host, in input order.
///
/// With `jobs == 1` hosts are probed strictly one after another. Larger
/// values run up to `jobs` pings at once; rows are still collected in input
/// order.
pub async fn probe_all(hosts: &[String], config: &ProbeConfig) -> Vec<ResultRow> {
	let mut rows = Vec::with_capacity(hosts.len());

	if config.jobs <= 1 {
		for host in hosts {
			let result = ping_host(host, config).await;
			println!("  {}: {}", host, result);
			rows.push(ResultRow { host: host.clone(), result });
		}
		return rows;
	}

	let semaphore = Arc::new(Semaphore::new(config.jobs));
	let mut handles = Vec::with_capacity(hosts.len());
	for host in hosts {
		let sem = semaphore.clone();
		let config = config.clone();
		let host = host.clone();

		handles.push(tokio::spawn(async move {
			let _permit = sem.acquire().await.ok();
			ping_host(&host, &config).await
		}));
	}

	for (host, handle) in hosts.iter().zip(handles) {
		let result = match handle.await {
			Ok(result) => result,
			Err(e) => {
				eprintln!("Warning: probe task for {} failed: {}", host, e);
				ProbeResult::absent()
			}
		};
		println!("  {}: {}", host, result);
		rows.push(ResultRow { host: host.clone(), result });
	}

	rows
}
