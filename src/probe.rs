//! The two-stage HTTP check for one URL. Always produces exactly one
//! `CheckResult` and never blocks past the configured timeout.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;

use crate::context::RunContext;
use crate::dispatcher::{self, Counter, ResultSender};
use crate::extractor;
use crate::work::{CheckResult, Work};

/// Sent on every outbound request.
const USER_AGENT_VALUE: &str = "Linkschkr 0.0.1 Beta";

fn reachable_head_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::OK | StatusCode::FORBIDDEN | StatusCode::METHOD_NOT_ALLOWED
    )
}

fn is_html(content_type: Option<&reqwest::header::HeaderValue>) -> bool {
    content_type
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("text/html"))
        .unwrap_or(false)
}

/// Performs the HEAD-then-conditional-GET check for `work`, forwarding
/// any discovered same-host links back into admission before returning.
pub async fn probe(
    work: Work,
    ctx: &Arc<RunContext>,
    counter: &Arc<Counter>,
    tx: &ResultSender,
) -> CheckResult {
    ctx.gate.acquire().await;
    ctx.debug.write_line(&format!("probing {}", work.url));

    let head = ctx
        .http_client
        .head(&work.url)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .header(ACCEPT, "*/*")
        .timeout(ctx.timeout)
        .send()
        .await;

    let head = match head {
        Ok(resp) => resp,
        Err(e) => {
            ctx.debug.write_line(&format!("HEAD {} failed: {}", work.url, e));
            return CheckResult::unknown(&work, e);
        }
    };

    if !reachable_head_status(head.status()) {
        return CheckResult::down(&work, head.status().as_u16());
    }

    if !is_html(head.headers().get(CONTENT_TYPE)) {
        return CheckResult::up(&work, head.status().as_u16());
    }

    let get = ctx
        .http_client
        .get(&work.url)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .header(ACCEPT, "*/*")
        .timeout(ctx.timeout)
        .send()
        .await;

    let get = match get {
        Ok(resp) => resp,
        Err(e) => {
            ctx.debug.write_line(&format!("GET {} failed: {}", work.url, e));
            return CheckResult::unknown(&work, e);
        }
    };

    let status = get.status();
    if status != StatusCode::OK {
        return CheckResult::down(&work, status.as_u16());
    }

    if ctx.recursive && ctx.same_host.matches(&work.url) {
        match get.text().await {
            Ok(body) => {
                let scheme_host = page_scheme_host(&work.url);
                for link in extractor::extract_links(&body, &scheme_host) {
                    dispatcher::admit(ctx, counter, tx, Work::discovered(link, work.url.clone()));
                }
            }
            Err(e) => {
                ctx.debug
                    .write_line(&format!("failed to read body of {}: {}", work.url, e));
            }
        }
    }

    CheckResult::up(&work, 200)
}

fn page_scheme_host(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{}://{}", parsed.scheme(), host),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}
