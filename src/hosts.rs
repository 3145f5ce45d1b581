use anyhow::{anyhow, Result};

/// Split host list text into hostname tokens.
///
/// Tokens are separated by any run of whitespace, across any number of lines.
/// Order and duplicates are preserved; no syntax checking is done.
pub fn parse_host_list(content: &str) -> Vec<String> {
	content.lines()
		.flat_map(|line| line.trim().split_whitespace())
		.map(String::from)
		.collect()
}

/// Read hostnames from a text file.
pub fn read_host_file(path: &str) -> Result<Vec<String>> {
	let content = std::fs::read_to_string(path)
		.map_err(|e| anyhow!("failed to read host file '{}': {}", path, e))?;
	Ok(parse_host_list(&content))
}
