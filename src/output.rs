use comfy_table::{Table, ContentArrangement, presets::UTF8_FULL};

use anyhow::{Context, Result};

use crate::model::{ProbeConfig, ResultRow};
use crate::probe::ECHO_COUNT;

/// CSV header row
pub const CSV_HEADER: [&str; 4] = ["filename", "min", "avg", "max"];

/// Print a summary of the run configuration before probing.
pub fn print_config_summary(
	input: &str,
	output: &str,
	host_count: usize,
	config: &ProbeConfig,
) {
	println!("Ping Configuration");
	println!("==================");
	println!("Input:          {}", input);
	println!("Output:         {}", output);
	println!("Hosts:          {}", host_count);
	println!("Echoes:         {}", ECHO_COUNT);
	println!("Jobs:           {}", config.jobs);
	println!("Ping program:   {} ({:?})", config.program, config.command);
	println!();
}

fn format_ms(value: Option<f64>) -> String {
	value.map(|v| v.to_string()).unwrap_or_default()
}

/// Print the probe results as a formatted table.
pub fn print_results_table(rows: &[ResultRow]) {
	let mut table = Table::new();
	table.load_preset(UTF8_FULL);
	table.set_content_arrangement(ContentArrangement::Dynamic);
	table.set_header(vec!["Host", "Min", "Avg", "Max"]);

	for row in rows {
		let r = &row.result;
		let cell = |v: Option<f64>| match v {
			Some(ms) => format!("{:.3} ms", ms),
			None => "-".to_string(),
		};
		table.add_row(vec![
			row.host.clone(),
			cell(r.min_ms),
			cell(r.avg_ms),
			cell(r.max_ms),
		]);
	}

	let reachable = rows.iter().filter(|r| !r.result.is_absent()).count();
	println!("\nPing Results");
	println!("============\n");
	println!("{table}");
	println!("{}/{} hosts responded", reachable, rows.len());
}

/// Write probe results to a CSV file, one row per host in the given order.
///
/// Absent values are written as empty fields.
pub fn write_csv(path: &str, rows: &[ResultRow]) -> Result<()> {
	let mut writer = csv::Writer::from_path(path)
		.with_context(|| format!("failed to open output file '{}'", path))?;

	writer.write_record(CSV_HEADER)
		.with_context(|| format!("failed to write to '{}'", path))?;

	for row in rows {
		let r = &row.result;
		writer.write_record([
			row.host.clone(),
			format_ms(r.min_ms),
			format_ms(r.avg_ms),
			format_ms(r.max_ms),
		]).with_context(|| format!("failed to write to '{}'", path))?;
	}

	writer.flush()
		.with_context(|| format!("failed to write to '{}'", path))?;
	println!("\nResults written to: {}", path);
	Ok(())
}
