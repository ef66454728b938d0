//! `linkschkr` -- a recursive link-checking crawler.
//!
//! The core is the concurrent crawl engine (`checker::check`): it fans
//! out rate-limited HTTP probes from one or more seed URLs, follows
//! same-host links discovered in HTML bodies, and reports every
//! discovered URL as reachable ("up") or unreachable ("down").
//!
//! A CLI driver (`bin/linkschkr`) and a cache-fronted HTTP facade
//! (`bin/linksws`, `webserver`) wrap this core but are not part of it.

pub mod cache;
mod context;
mod dispatcher;
mod error;
mod extractor;
mod probe;
mod rate;
mod sink;
mod url_util;
mod visited;
pub mod webserver;
mod work;

pub mod checker;

pub use checker::{check, CheckOptions, CheckReport};
pub use error::{Error, Result};
pub use sink::Sink;
pub use work::{CheckResult, State, Stats, Work};
