//! Prober trait for fetching date headers of static resources

#[cfg(test)]
use mockall::automock;

use crate::date::HeaderKind;

/// Date header values of one resource, with surrounding quotes removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateHeaders {
    pub etag: Option<String>,
    pub last_modified: Option<String>,
}

impl DateHeaders {
    pub fn get(&self, kind: HeaderKind) -> Option<&str> {
        match kind {
            HeaderKind::ETag => self.etag.as_deref(),
            HeaderKind::LastModified => self.last_modified.as_deref(),
        }
    }

    pub fn set(&mut self, kind: HeaderKind, value: impl Into<String>) {
        let value = Some(value.into());
        match kind {
            HeaderKind::ETag => self.etag = value,
            HeaderKind::LastModified => self.last_modified = value,
        }
    }

    /// Present headers, in observation order
    pub fn iter(&self) -> impl Iterator<Item = (HeaderKind, &str)> {
        HeaderKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|value| (kind, value)))
    }
}

/// Transport failure that ends the whole scan
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Connection to {url} timed out")]
    ConnectTimeout { url: String },

    /// Refused, reset, or failed TLS handshake
    #[error("Connection to {url} failed: {reason}")]
    Connection { url: String, reason: String },

    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

impl ProbeError {
    /// Short failure type for the diagnostic line
    pub fn kind_name(&self) -> &'static str {
        match self {
            ProbeError::ConnectTimeout { .. } => "ConnectTimeout",
            ProbeError::Connection { .. } => "ConnectionError",
            ProbeError::Request { .. } => "RequestError",
        }
    }
}

/// Trait for fetching the date headers of a resource on the target
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Fetches `resource` relative to the target
    ///
    /// # Returns
    /// * `Ok(Some(DateHeaders))` - The resource exists; any date headers it carries
    /// * `Ok(None)` - Error status or read timeout; the resource contributes nothing
    /// * `Err(ProbeError)` - The target cannot be reached; the scan must stop
    async fn fetch_date_headers(&self, resource: &str) -> Result<Option<DateHeaders>, ProbeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_yields_etag_before_last_modified() {
        let mut headers = DateHeaders::default();
        headers.set(HeaderKind::LastModified, "Mon, 02 Mar 2020 18:20:48 GMT");
        headers.set(HeaderKind::ETag, "5e5d-5e5d4e80");

        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec![
                (HeaderKind::ETag, "5e5d-5e5d4e80"),
                (HeaderKind::LastModified, "Mon, 02 Mar 2020 18:20:48 GMT"),
            ]
        );
    }

    #[test]
    fn iter_skips_missing_headers() {
        let headers = DateHeaders {
            etag: None,
            last_modified: Some("Mon, 02 Mar 2020 18:20:48 GMT".to_string()),
        };

        assert_eq!(headers.iter().count(), 1);
    }
}
