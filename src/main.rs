use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use scoreboard::Error;

// Exit codes: 0 success, 1 config failures, 2 data failures. Never 0 on
// failure.
const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_DATA: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "scoreboard")]
#[command(about = "Ranks named scores from a CSV data file", long_about = None)]
#[command(version)]
struct Cli {
    /// The path to the config file.
    // A String, not a PathBuf: clap's PathBuf parser rejects "" outright,
    // and an empty path must reach the loader to report ConfigMissing.
    #[arg(long)]
    path: Option<String>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    let config_path = cli.path.map(PathBuf::from);
    let ranking = match scoreboard::pipeline::build_ranking(config_path.as_deref(), cli.verbose) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(exit_code(&e));
        }
    };

    for record in &ranking.records {
        println!("{}", scoreboard::output::format_record(record));
    }

    if cli.verbose {
        eprintln!(
            "Total: {} records ({}) in {:?}",
            ranking.records.len(),
            ranking.direction,
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}

fn exit_code(error: &Error) -> i32 {
    match error {
        Error::ConfigMissing
        | Error::ConfigRead { .. }
        | Error::ConfigParse { .. }
        | Error::InvalidSortDirection { .. } => EXIT_CONFIG,
        Error::DataOpen { .. } | Error::MalformedRow { .. } | Error::NumberParse { .. } => {
            EXIT_DATA
        }
    }
}
