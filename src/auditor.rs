//! Security headers audit

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    AuditResult, CheckKind, CheckOutcome, RequiredHeader, DISCLOSURE_HEADER, MAX_VALUE_CHARS,
    REQUIRED_HEADERS,
};
use reqwest::header::HeaderMap;
use tracing::{debug, error, info};
use url::Url;

/// Receives audit progress as it happens
pub trait AuditListener {
    /// Response received, checks are about to run
    fn started(&mut self, _target: &str) {}

    /// A single check was evaluated
    fn checked(&mut self, _check: &CheckOutcome) {}

    /// Every check has run
    fn completed(&mut self, _result: &AuditResult) {}

    /// The request did not complete
    fn failed(&mut self, _target: &str, _message: &str) {}
}

impl AuditListener for () {}

/// Checks a target's response for the required security headers
pub struct HeaderAuditor;

impl HeaderAuditor {
    /// Requests `target` once and audits its headers.
    ///
    /// Request failures never escape: they are logged and recorded on the
    /// returned result, which then reports failure.
    pub async fn run(
        &self,
        client: &HttpClient,
        target: &str,
        listener: &mut dyn AuditListener,
    ) -> AuditResult {
        info!("Auditing {}", target);

        let mut result = match fetch_headers(client, target).await {
            Ok(headers) => evaluate_headers(target, &headers, listener),
            Err(e) => {
                error!("Request to {} failed: {}", target, e);
                let mut failed = AuditResult::new(target);
                failed.fail(e.to_string());
                listener.failed(target, &e.to_string());
                failed
            }
        };

        result.finish();
        info!(
            "Audit of {} finished in {}ms: {} passed, {} failed",
            result.target,
            result.elapsed_ms().unwrap_or_default(),
            result.present.len(),
            result.missing.len()
        );
        result
    }
}

async fn fetch_headers(client: &HttpClient, target: &str) -> Result<HeaderMap> {
    let url = Url::parse(target)?;
    let response = client.get(url.as_str()).await?;
    Ok(response.headers().clone())
}

/// Evaluates a header mapping against the required-header policy.
///
/// Required headers are checked in declaration order, the disclosure check
/// comes last. Name lookup is case-insensitive. The listener sees each check
/// as soon as it is evaluated.
pub fn evaluate_headers(
    target: &str,
    headers: &HeaderMap,
    listener: &mut dyn AuditListener,
) -> AuditResult {
    let mut result = AuditResult::new(target);
    listener.started(target);

    for required in &REQUIRED_HEADERS {
        let (outcome, summary) = check_required(required, header_value(headers, required.name));
        listener.checked(&outcome);
        result.record(outcome, summary);
    }

    let (outcome, summary) = check_disclosure(header_value(headers, DISCLOSURE_HEADER));
    listener.checked(&outcome);
    result.record(outcome, summary);

    listener.completed(&result);
    result
}

/// Joins every value sent for `name`, decoding bytes as latin-1
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|v| v.as_bytes().iter().map(|&b| b as char).collect())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

fn check_required(required: &RequiredHeader, value: Option<String>) -> (CheckOutcome, String) {
    debug!("Checking header '{}': {:?}", required.name, value);

    match value {
        Some(v) => (
            CheckOutcome {
                header: required.name.to_string(),
                description: required.description.to_string(),
                kind: CheckKind::Required,
                passed: true,
                value: Some(truncate(&v, MAX_VALUE_CHARS)),
            },
            format!("✓ {}: {}", required.name, required.description),
        ),
        None => (
            CheckOutcome {
                header: required.name.to_string(),
                description: required.description.to_string(),
                kind: CheckKind::Required,
                passed: false,
                value: None,
            },
            format!("✗ {}: {}", required.name, required.description),
        ),
    }
}

fn check_disclosure(value: Option<String>) -> (CheckOutcome, String) {
    debug!("Checking header '{}': {:?}", DISCLOSURE_HEADER, value);

    let passed = value.is_none();
    let summary = if passed {
        format!("✓ {DISCLOSURE_HEADER} removed (server signature hidden)")
    } else {
        format!("✗ {DISCLOSURE_HEADER} still present")
    };

    (
        CheckOutcome {
            header: DISCLOSURE_HEADER.to_string(),
            description: "Server signature hidden".to_string(),
            kind: CheckKind::Disclosure,
            passed,
            value,
        },
        summary,
    )
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
