//! Checker entry point: validates seeds and builds the shared run
//! context before handing off to the dispatcher.

use std::sync::Arc;
use std::time::Duration;

use crate::context::RunContext;
use crate::dispatcher;
use crate::error::{Error, Result};
use crate::rate::Gate;
use crate::sink::Sink;
use crate::url_util;
use crate::visited::VisitedSet;
use crate::work::{CheckResult, Stats, Work};

const DEFAULT_INTERVAL_MS: u64 = 100;

/// Options recognised by `check`, built with the `with_*` builder
/// methods below rather than the Go original's functional-option
/// closures -- the idiomatic Rust equivalent.
#[derive(Clone)]
pub struct CheckOptions {
    interval_ms: u64,
    timeout_ms: Option<u64>,
    no_recursion: bool,
    http_client: Option<reqwest::Client>,
    stdout: Sink,
    debug: Sink,
    quiet: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            timeout_ms: None,
            no_recursion: false,
            http_client: None,
            stdout: Sink::discard(),
            debug: Sink::discard(),
            quiet: false,
        }
    }
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval_ms(mut self, n: u64) -> Self {
        self.interval_ms = n;
        self
    }

    pub fn with_timeout_ms(mut self, n: u64) -> Self {
        self.timeout_ms = Some(n);
        self
    }

    pub fn with_no_recursion(mut self, b: bool) -> Self {
        self.no_recursion = b;
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn with_stdout(mut self, sink: Sink) -> Self {
        self.stdout = sink;
        self
    }

    pub fn with_debug(mut self, sink: Sink) -> Self {
        self.debug = sink;
        self
    }

    pub fn with_quiet(mut self, b: bool) -> Self {
        self.quiet = b;
        self
    }
}

/// A finished crawl: the failure set, the success set, and aggregate
/// stats.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub failures: Vec<CheckResult>,
    pub successes: Vec<CheckResult>,
    pub stats: Stats,
}

/// Crawls the hyperlink graph reachable from `seeds`, classifying each
/// discovered URL as up or down.
///
/// An unparseable or empty seed fails the whole run before any probing
/// starts. Per-URL failures never surface here -- they land in
/// `CheckReport::failures` instead.
pub async fn check(seeds: &[impl AsRef<str>], mut opts: CheckOptions) -> Result<CheckReport> {
    if seeds.is_empty() {
        return Err(Error::NoSeeds);
    }

    if opts.quiet {
        opts.stdout = Sink::discard();
        opts.debug = Sink::discard();
    }

    let mut seed_works = Vec::with_capacity(seeds.len());
    let mut same_host = None;
    for raw in seeds {
        let parsed = url_util::parse_validated(raw.as_ref())?;
        if same_host.is_none() {
            same_host = Some(url_util::same_host_of(&parsed));
        }
        seed_works.push(Work::seed(parsed.to_string()));
    }
    let same_host = same_host.expect("at least one seed validated above");

    let timeout = Duration::from_millis(opts.timeout_ms.unwrap_or(opts.interval_ms));
    let client = match opts.http_client {
        Some(c) => c,
        None => reqwest::Client::builder().build().map_err(Error::Client)?,
    };

    let ctx = Arc::new(RunContext {
        timeout,
        recursive: !opts.no_recursion,
        http_client: client,
        same_host,
        visited: VisitedSet::new(),
        gate: Gate::new(Duration::from_millis(opts.interval_ms)),
        stdout: opts.stdout,
        debug: opts.debug,
    });

    let (failures, successes, stats) = dispatcher::run(ctx, seed_works).await;
    Ok(CheckReport {
        failures,
        successes,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_empty_seed_list() {
        let seeds: Vec<String> = Vec::new();
        let err = check(&seeds, CheckOptions::new()).await.unwrap_err();
        assert!(matches!(err, Error::NoSeeds));
    }

    #[tokio::test]
    async fn rejects_unparseable_seed() {
        let seeds = vec!["not a url".to_string()];
        let err = check(&seeds, CheckOptions::new()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidSeed(_, _)));
    }

    #[tokio::test]
    async fn rejects_schemeless_seed() {
        let seeds = vec!["example.com".to_string()];
        let err = check(&seeds, CheckOptions::new()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidSeed(_, _) | Error::MissingHost(_)));
    }
}
