use clap::Parser;

/// Ping every host listed in a text file and write min/avg/max RTT to CSV
#[derive(Parser, Debug)]
#[command(name = "ping_website")]
#[command(about = "Ping a list of hosts and write the round-trip times to a CSV file")]
pub struct Cli {
	/// Input file with host names separated by whitespace or newlines
	pub input_txt: String,

	/// Output CSV file (overwritten if it exists)
	pub output_csv: String,

	/// Maximum number of pings running at once (1 = one host after another)
	#[arg(short = 'j', long = "jobs", default_value = "1",
		value_parser = clap::value_parser!(u16).range(1..))]
	pub jobs: u16,

	/// Ping executable to invoke
	#[arg(long = "ping", default_value = "ping")]
	pub ping: String,

	/// Print a results table after writing the CSV
	#[arg(long = "summary")]
	pub summary: bool,
}
