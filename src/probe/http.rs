//! reqwest-based prober

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, info};

use crate::config::{ACCEPT, ACCEPT_LANGUAGE, ScanConfig};
use crate::date::HeaderKind;
use crate::probe::prober::{DateHeaders, ProbeError, Prober};

/// Prober issuing plain GET requests against one target
pub struct HttpProber {
    client: reqwest::Client,
    target: String,
}

impl HttpProber {
    /// Creates a prober for `target` (e.g., "https://vpn.example.com")
    ///
    /// The timeout bounds connecting and each read separately, so a slow
    /// connect surfaces as a connect error rather than a request timeout.
    /// Certificate verification is controlled by this client only.
    pub fn new(target: &str, config: &ScanConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut headers = HeaderMap::new();
        headers.insert(header::CONNECTION, HeaderValue::from_static("close"));
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers.insert(
            header::UPGRADE_INSECURE_REQUESTS,
            HeaderValue::from_static("1"),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            target: target.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.target, resource)
    }
}

#[async_trait::async_trait]
impl Prober for HttpProber {
    async fn fetch_date_headers(&self, resource: &str) -> Result<Option<DateHeaders>, ProbeError> {
        let url = self.url(resource);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() && !e.is_connect() => {
                info!("[-] timeout {}", resource);
                return Ok(None);
            }
            Err(e) => return Err(classify(url, e)),
        };

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            info!("[-] {} {}", status.as_u16(), resource);
            return Ok(None);
        }
        info!("[+] {} {}", status.as_u16(), resource);

        let mut date_headers = DateHeaders::default();
        for kind in HeaderKind::ALL {
            let Some(value) = response.headers().get(kind.as_str()) else {
                continue;
            };
            match value.to_str() {
                Ok(value) => date_headers.set(kind, value.trim_matches('"')),
                Err(_) => debug!("Ignoring non-ASCII {} header on {}", kind, resource),
            }
        }

        Ok(Some(date_headers))
    }
}

fn classify(url: String, error: reqwest::Error) -> ProbeError {
    if error.is_connect() && error.is_timeout() {
        ProbeError::ConnectTimeout { url }
    } else if error.is_connect() {
        ProbeError::Connection {
            url,
            reason: error_chain(&error),
        }
    } else {
        ProbeError::Request {
            url,
            reason: error_chain(&error),
        }
    }
}

/// Joins an error with its sources; reqwest keeps the useful part
/// (refused, reset, handshake) a few levels down.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
