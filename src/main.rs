//! pagesim CLI.
//!
//! ```text
//! pagesim -n 3 -p lru 7 0 1 2 0 3 0 4
//! pagesim -n 4 -p both -f refs.txt
//! ```

use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, LevelFilter};

use pagesim::common::config::{validate_frame_count, DEFAULT_FRAME_COUNT};
use pagesim::report::{self, resolve_reference_string};
use pagesim::{compare, simulate_config, Error, PageId, PolicyKind, Result, SimConfig};

/// Which policies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyChoice {
    Single(PolicyKind),
    /// FIFO and LRU side by side.
    Both,
}

impl FromStr for PolicyChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("both") {
            Ok(PolicyChoice::Both)
        } else {
            s.parse().map(PolicyChoice::Single)
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    version,
    about = "FIFO / LRU page-replacement simulator",
    long_about = None,
)]
struct Cli {
    /// Number of physical frames.
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_FRAME_COUNT as i64,
        allow_negative_numbers = true
    )]
    frames: i64,

    /// Replacement policy: fifo, lru or both.
    #[arg(short, long, default_value = "both", value_parser = PolicyChoice::from_str)]
    policy: PolicyChoice,

    /// Read the reference string from a file.
    #[arg(short, long, conflicts_with = "pages")]
    file: Option<String>,

    /// Print debug logging (repeat for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Page numbers, separated by spaces or commas.
    pages: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins when set.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let pages = resolve_reference_string(cli.pages.as_slice(), cli.file.as_deref())?;
    debug!("{} requests, {} frames, {:?}", pages.len(), cli.frames, cli.policy);

    let output = match cli.policy {
        PolicyChoice::Single(kind) => single(cli.frames, kind, &pages)?,
        PolicyChoice::Both => {
            let frames = validate_frame_count(cli.frames)?;
            report::render_comparison(&compare(&pages, frames)?)
        }
    };
    Ok(output)
}

fn single(frames: i64, policy: PolicyKind, pages: &[PageId]) -> Result<String> {
    let config = SimConfig::new(frames, policy)?;
    let result = simulate_config(&config, pages)?;
    Ok(report::render_table(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pagesim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_policy_choice_parse() {
        assert_eq!("both".parse::<PolicyChoice>().unwrap(), PolicyChoice::Both);
        assert_eq!(
            "LRU".parse::<PolicyChoice>().unwrap(),
            PolicyChoice::Single(PolicyKind::Lru)
        );
        assert!(matches!(
            "clock".parse::<PolicyChoice>(),
            Err(Error::UnknownPolicy(_))
        ));
    }

    #[test]
    fn test_unknown_policy_rejected_by_cli() {
        let args = ["pagesim", "-p", "clock", "1"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_missing_reference_string() {
        let cli = cli(&["-p", "fifo"]);
        assert!(matches!(run(&cli), Err(Error::MissingReferenceString)));
    }

    #[test]
    fn test_single_policy_table() {
        let out = run(&cli(&["-n", "3", "-p", "lru", "1", "2", "3", "1", "2", "4"])).unwrap();
        assert!(out.starts_with("LRU Algorithm Simulation\n"));
        assert!(out.ends_with("Total Page Hits: 2"));
    }

    #[test]
    fn test_both_validates_frame_count() {
        assert!(matches!(
            run(&cli(&["-n", "0", "1", "2"])),
            Err(Error::InvalidFrameCount(0))
        ));
        assert!(matches!(
            run(&cli(&["-n", "-2", "1", "2"])),
            Err(Error::InvalidFrameCount(-2))
        ));
    }

    #[test]
    fn test_both_renders_comparison() {
        let out = run(&cli(&["1,2,3,1,2,4"])).unwrap();
        assert!(out.contains("FIFO Algorithm Simulation"));
        assert!(out.contains("LRU Algorithm Simulation"));
        assert!(out.ends_with("FIFO and LRU tie at 4 faults"));
    }
}
