//! Website reachability prober.
//!
//! This module issues a single timed HTTP GET against a user-supplied URL and
//! classifies the outcome. A server answering with any HTTP status code at all
//! (404 and 500 included) counts as up; only transport-level failures such as
//! timeouts, refused connections and TLS errors count as down.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Hard upper bound for a probe, covering connection and full response.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error descriptions shown to users are cut off at this many characters.
const MAX_ERROR_LEN: usize = 100;

/// Outcome of a single website probe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    /// The URL actually requested, always scheme-qualified
    pub url: String,
    /// Whether a server answered, and what it said
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}

/// The two reachability cases.
///
/// `Up` carries everything only a response can provide, `Down` carries only
/// an error description, so an impossible combination (a down result with an
/// HTTP code, say) cannot be constructed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProbeOutcome {
    Up {
        /// Numeric HTTP status code, whatever it was (including 4xx/5xx)
        http_code: u16,
        /// URL the response came from, after following redirects
        final_url: String,
        /// Wall-clock latency in fractional milliseconds
        elapsed_ms: f64,
    },
    Down {
        /// Human-readable failure description, at most 100 characters
        error: String,
    },
}

/// Coarse speed category derived from a probe's latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedRating {
    Blazing,
    Fast,
    Normal,
    Slow,
    VerySlow,
    NoResponse,
}

impl SpeedRating {
    /// Bucket a measured latency. Boundary values land in the slower bucket.
    fn from_elapsed_ms(elapsed_ms: f64) -> Self {
        if elapsed_ms < 200.0 {
            Self::Blazing
        } else if elapsed_ms < 500.0 {
            Self::Fast
        } else if elapsed_ms < 1000.0 {
            Self::Normal
        } else if elapsed_ms < 2000.0 {
            Self::Slow
        } else {
            Self::VerySlow
        }
    }

    /// User-facing name of the rating.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Blazing => "BLAZING",
            Self::Fast => "FAST",
            Self::Normal => "NORMAL",
            Self::Slow => "SLOW",
            Self::VerySlow => "VERY SLOW",
            Self::NoResponse => "NO RESPONSE",
        }
    }

    /// Five-segment meter matching the rating.
    pub fn meter(&self) -> &'static str {
        match self {
            Self::Blazing => "▰▰▰▰▰",
            Self::Fast => "▰▰▰▰▱",
            Self::Normal => "▰▰▰▱▱",
            Self::Slow => "▰▰▱▱▱",
            Self::VerySlow => "▰▱▱▱▱",
            Self::NoResponse => "▱▱▱▱▱",
        }
    }

    /// Emoji shown next to the response time.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Blazing => "⚡",
            Self::Fast => "🚀",
            Self::Normal => "🏃",
            Self::Slow => "🐢",
            Self::VerySlow => "🐌",
            Self::NoResponse => "💀",
        }
    }
}

impl ProbeResult {
    /// Whether a server answered at all.
    pub fn is_up(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Up { .. })
    }

    /// HTTP status code, if a response was received.
    pub fn http_code(&self) -> Option<u16> {
        match &self.outcome {
            ProbeOutcome::Up { http_code, .. } => Some(*http_code),
            ProbeOutcome::Down { .. } => None,
        }
    }

    /// URL the response came from after redirects, if a response was received.
    pub fn final_url(&self) -> Option<&str> {
        match &self.outcome {
            ProbeOutcome::Up { final_url, .. } => Some(final_url),
            ProbeOutcome::Down { .. } => None,
        }
    }

    /// Measured latency in milliseconds; exactly 0 when the site is down.
    pub fn elapsed_ms(&self) -> f64 {
        match &self.outcome {
            ProbeOutcome::Up { elapsed_ms, .. } => *elapsed_ms,
            ProbeOutcome::Down { .. } => 0.0,
        }
    }

    /// Failure description, if no response was received.
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            ProbeOutcome::Up { .. } => None,
            ProbeOutcome::Down { error } => Some(error),
        }
    }

    /// HTTP status code as display text, or "N/A" when the site is down.
    pub fn http_code_text(&self) -> String {
        match self.http_code() {
            Some(code) => code.to_string(),
            None => "N/A".to_string(),
        }
    }

    /// Speed category for this result.
    pub fn speed_rating(&self) -> SpeedRating {
        match &self.outcome {
            ProbeOutcome::Up { elapsed_ms, .. } => SpeedRating::from_elapsed_ms(*elapsed_ms),
            ProbeOutcome::Down { .. } => SpeedRating::NoResponse,
        }
    }
}

/// Ensure a URL carries an explicit scheme, defaulting to HTTPS.
///
/// No other validation happens here: malformed input is allowed through so it
/// surfaces as a down result rather than being rejected upfront.
///
/// # Examples
///
/// ```
/// use vibecheck::prober::normalize_url;
///
/// assert_eq!(normalize_url("google.com"), "https://google.com");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

/// Check whether a website is up or down.
///
/// Issues exactly one GET against the normalized URL, following redirects,
/// with a fixed 10 second timeout and no retries. Latency is measured from
/// just before the request is sent until the full response has arrived.
///
/// # Arguments
///
/// * `client` - HTTP client to use for the request
/// * `raw_url` - URL to probe, with or without a scheme
///
/// # Returns
///
/// Always returns a well-formed [`ProbeResult`]; every failure is folded into
/// the `Down` case rather than propagated. Callers never need to handle an
/// error from this function.
///
/// # Examples
///
/// ```no_run
/// use vibecheck::prober::probe_website;
///
/// # async fn example() {
/// let client = reqwest::Client::new();
/// let result = probe_website(&client, "google.com").await;
///
/// if result.is_up() {
///     println!("{} answered in {:.2}ms", result.url, result.elapsed_ms());
/// }
/// # }
/// ```
pub async fn probe_website(client: &reqwest::Client, raw_url: &str) -> ProbeResult {
    let url = normalize_url(raw_url);

    let start = Instant::now();
    let outcome = match client.get(&url).timeout(REQUEST_TIMEOUT).send().await {
        Ok(response) => {
            let http_code = response.status().as_u16();
            let final_url = response.url().to_string();
            // Drain the body so the measurement covers the full response,
            // not just the headers.
            match response.bytes().await {
                Ok(_) => ProbeOutcome::Up {
                    http_code,
                    final_url,
                    elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
                },
                Err(e) => ProbeOutcome::Down {
                    error: describe_failure(&e),
                },
            }
        }
        Err(e) => ProbeOutcome::Down {
            error: describe_failure(&e),
        },
    };

    ProbeResult { url, outcome }
}

/// Map a request failure onto one of the user-facing error messages.
fn describe_failure(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        return "Request timed out (10s)".to_string();
    }
    // reqwest folds TLS handshake failures into its connect-error category,
    // so the certificate check has to run before the connect check.
    if is_tls_failure(error) {
        return "SSL certificate error".to_string();
    }
    if error.is_connect() {
        return "Connection refused".to_string();
    }
    truncate_error(&error.to_string())
}

/// Walk the error source chain looking for TLS/certificate failures.
fn is_tls_failure(error: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(error);
    while let Some(inner) = source {
        let message = inner.to_string().to_lowercase();
        if message.contains("certificate") || message.contains("tls") || message.contains("ssl") {
            return true;
        }
        source = inner.source();
    }
    false
}

fn truncate_error(message: &str) -> String {
    message.chars().take(MAX_ERROR_LEN).collect()
}
