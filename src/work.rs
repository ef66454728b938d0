use serde::Serialize;
use std::fmt;

/// A single unit of crawl work: a URL to probe, and the page it was
/// discovered on (empty for seeds). Created by the dispatcher when
/// admitting a URL, consumed by exactly one probe.
#[derive(Debug, Clone)]
pub struct Work {
    pub url: String,
    pub refer: String,
}

impl Work {
    pub fn seed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            refer: String::new(),
        }
    }

    pub fn discovered(url: impl Into<String>, refer: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            refer: refer.into(),
        }
    }
}

/// Reachability classification for a single probed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Up,
    Down,
    Unknown,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            State::Up => "up",
            State::Down => "down",
            State::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// The result of probing a single URL. Field names match the JSON shape
/// required by the public entry surface: `error`, `refer`, `responseCode`,
/// `state`, `url`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub url: String,
    pub refer: String,
    #[serde(rename = "responseCode")]
    pub response_code: u16,
    pub state: State,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    pub fn up(work: &Work, response_code: u16) -> Self {
        Self {
            url: work.url.clone(),
            refer: work.refer.clone(),
            response_code,
            state: State::Up,
            error: None,
        }
    }

    pub fn down(work: &Work, response_code: u16) -> Self {
        Self {
            url: work.url.clone(),
            refer: work.refer.clone(),
            response_code,
            state: State::Down,
            error: None,
        }
    }

    pub fn unknown(work: &Work, error: impl fmt::Display) -> Self {
        Self {
            url: work.url.clone(),
            refer: work.refer.clone(),
            response_code: 0,
            state: State::Unknown,
            error: Some(error.to_string()),
        }
    }

    /// True when the GET reached status 200, or the HEAD short-circuited
    /// the check with a non-HTML body on a 200/403/405 status.
    pub fn is_success(&self) -> bool {
        self.response_code == 200 || self.state == State::Up
    }
}

/// Aggregate counters updated only by the result collector, read only
/// after the completion latch settles.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Stats {
    pub total: u64,
    pub successes: u64,
    pub failures: u64,
}
