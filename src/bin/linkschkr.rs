//! Command-line driver: parses seeds and crawl options, wires up
//! per-run output sinks and the process-wide logger, then reports
//! aggregate stats and a non-zero exit code on a run-level error.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use linkschkr::{check, CheckOptions, Sink};

/// Recursive link-checking crawler.
#[derive(Parser, Debug)]
#[command(name = "linkschkr", version, author)]
struct Opts {
    /// Seed URL(s) to start crawling from.
    #[arg(required = true)]
    sites: Vec<String>,

    /// Crawler will only check the seed pages; links are not followed.
    #[arg(short, long)]
    no_recursion: bool,

    /// Period between outbound requests, in milliseconds.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Per-request HTTP timeout, in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Run in debug mode (prints to stderr).
    #[arg(short, long)]
    debug: bool,

    /// Output nothing but the final statistics.
    #[arg(short, long)]
    quiet: bool,

    /// Verbosity of the process-wide logger. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(opts: &Opts) {
    let level = match opts.verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::from_env(Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let opts = Opts::parse();
    init_logger(&opts);

    let stdout = if opts.quiet { Sink::discard() } else { Sink::stdout() };
    let debug = if opts.debug && !opts.quiet {
        Sink::stderr()
    } else {
        Sink::discard()
    };

    let check_opts = CheckOptions::new()
        .with_interval_ms(opts.interval_ms)
        .with_no_recursion(opts.no_recursion)
        .with_stdout(stdout)
        .with_debug(debug)
        .with_quiet(opts.quiet);
    let check_opts = match opts.timeout_ms {
        Some(ms) => check_opts.with_timeout_ms(ms),
        None => check_opts,
    };

    match check(&opts.sites, check_opts).await {
        Ok(report) => {
            if !opts.quiet {
                println!(
                    "checked {} url(s): {} up, {} down",
                    report.stats.total, report.stats.successes, report.stats.failures
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = writeln!(std::io::stderr(), "linkschkr: {}", e);
            ExitCode::FAILURE
        }
    }
}
