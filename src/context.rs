//! Everything shared read-only across the probes and the dispatcher for
//! the lifetime of one call to `check`.

use crate::rate::Gate;
use crate::sink::Sink;
use crate::url_util::SameHost;
use crate::visited::VisitedSet;
use std::time::Duration;

pub struct RunContext {
    pub timeout: Duration,
    pub recursive: bool,
    pub http_client: reqwest::Client,
    pub same_host: SameHost,
    pub visited: VisitedSet,
    pub gate: Gate,
    pub stdout: Sink,
    pub debug: Sink,
}
