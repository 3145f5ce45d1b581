mod cli;
mod error;
mod hosts;
mod model;
mod output;
mod probe;

use clap::Parser;

use crate::cli::Cli;
use crate::model::ProbeConfig;
use crate::probe::CommandBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	// Read the whole host list before touching the output file
	let hosts = hosts::read_host_file(&cli.input_txt)?;

	let config = ProbeConfig {
		program: cli.ping.clone(),
		command: CommandBuilder::native(),
		jobs: usize::from(cli.jobs),
	};

	output::print_config_summary(&cli.input_txt, &cli.output_csv, hosts.len(), &config);

	println!("Pinging {} host(s)...", hosts.len());
	let rows = probe::probe_all(&hosts, &config).await;

	output::write_csv(&cli.output_csv, &rows)?;

	if cli.summary {
		output::print_results_table(&rows);
	}

	Ok(())
}
