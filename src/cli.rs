// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing and help text.
use anyhow::{Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub events: Option<PathBuf>,
    pub locale: Option<String>,
    pub more: usize,
    pub json: bool,
    pub verbose: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, excluding the binary name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut out = CliArgs::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let mut value = |flag: &str| {
                iter.next()
                    .cloned()
                    .ok_or_else(|| anyhow!("Missing value for {}", flag))
            };

            match arg.as_str() {
                "-h" | "--help" | "help" => out.help = true,
                "-v" | "--verbose" => out.verbose = true,
                "--json" => out.json = true,
                "-r" | "--root" => out.root = Some(PathBuf::from(value(arg)?)),
                "-e" | "--events" => out.events = Some(PathBuf::from(value(arg)?)),
                "-l" | "--locale" => out.locale = Some(value(arg)?),
                "-m" | "--more" => {
                    let raw = value(arg)?;
                    out.more = raw
                        .parse()
                        .map_err(|_| anyhow!("Invalid number for --more: '{}'", raw))?;
                }
                other => return Err(anyhow!("Unknown argument: '{}'", other)),
            }
        }

        Ok(out)
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "Upcoming events v{} - Community conferences that have not ended yet",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS]", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -e, --events <file>   Read event records from this JSON file.");
    println!("    -l, --locale <tag>    Format dates for this locale (e.g. en-GB, de).");
    println!("    -m, --more <n>        Press \"load more\" n times before printing.");
    println!("        --json            Print the visible events as JSON.");
    println!("    -v, --verbose         Log debug information to stderr.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("EVENT FILE FORMAT:");
    println!("    A JSON array of records with title, to, location, description,");
    println!("    startDate and endDate (YYYY-MM-DD).");
    println!();
    println!("EXAMPLES:");
    println!("    {} --events community-events.json", binary_name);
    println!("    {} --more 2 --locale de", binary_name);
    println!("    {} --json > upcoming.json", binary_name);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let parsed = CliArgs::parse(&args(&[
            "--root", "/tmp/x", "-e", "ev.json", "--locale", "de", "-m", "3", "--json", "-v",
        ]))
        .unwrap();

        assert_eq!(parsed.root, Some(PathBuf::from("/tmp/x")));
        assert_eq!(parsed.events, Some(PathBuf::from("ev.json")));
        assert_eq!(parsed.locale.as_deref(), Some("de"));
        assert_eq!(parsed.more, 3);
        assert!(parsed.json);
        assert!(parsed.verbose);
        assert!(!parsed.help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(CliArgs::parse(&args(&["--root"])).is_err());
        assert!(CliArgs::parse(&args(&["--more", "lots"])).is_err());
        assert!(CliArgs::parse(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(CliArgs::parse(&[]).unwrap(), CliArgs::default());
    }
}
