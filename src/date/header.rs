//! Recognized date headers

use chrono::NaiveDate;

use crate::date::normalize::{FormatError, etag_to_date, last_modified_to_date};

/// Response header carrying a cache-validation timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    /// `ETag` with a hex Unix timestamp suffix
    ETag,
    /// `Last-Modified` HTTP date
    LastModified,
}

/// Decoder from a raw header value to a calendar date
pub type Normalizer = fn(&str) -> Result<NaiveDate, FormatError>;

impl HeaderKind {
    /// Every recognized header, in the order observations are made
    pub const ALL: [HeaderKind; 2] = [HeaderKind::ETag, HeaderKind::LastModified];

    /// Returns the HTTP header name
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderKind::ETag => "ETag",
            HeaderKind::LastModified => "Last-Modified",
        }
    }

    /// Returns the decoder for this header's values
    pub fn normalizer(&self) -> Normalizer {
        match self {
            HeaderKind::ETag => etag_to_date,
            HeaderKind::LastModified => last_modified_to_date,
        }
    }
}

impl std::fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date header value resolved to the calendar date it encodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedTimestamp {
    pub source_header: HeaderKind,
    pub raw_value: String,
    pub resolved_date: NaiveDate,
}

impl ObservedTimestamp {
    /// Decode `raw_value` with the normalizer of `source_header`
    pub fn resolve(source_header: HeaderKind, raw_value: &str) -> Result<Self, FormatError> {
        let resolved_date = (source_header.normalizer())(raw_value)?;
        Ok(Self {
            source_header,
            raw_value: raw_value.to_string(),
            resolved_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_last_modified_keeps_raw_value() {
        let observed =
            ObservedTimestamp::resolve(HeaderKind::LastModified, "Mon, 02 Mar 2020 18:20:48 GMT")
                .unwrap();

        assert_eq!(
            observed,
            ObservedTimestamp {
                source_header: HeaderKind::LastModified,
                raw_value: "Mon, 02 Mar 2020 18:20:48 GMT".to_string(),
                resolved_date: NaiveDate::from_ymd_opt(2020, 3, 2).unwrap(),
            }
        );
    }

    #[test]
    fn resolve_dispatches_on_header_kind() {
        // A Last-Modified value is not a valid ETag and vice versa
        let last_modified = "Mon, 02 Mar 2020 18:20:48 GMT";
        let etag = "5e5d-5e5d4e80";

        assert!(ObservedTimestamp::resolve(HeaderKind::ETag, last_modified).is_err());
        assert!(ObservedTimestamp::resolve(HeaderKind::LastModified, etag).is_err());
        assert!(ObservedTimestamp::resolve(HeaderKind::ETag, etag).is_ok());
    }

    #[test]
    fn all_lists_etag_before_last_modified() {
        assert_eq!(
            HeaderKind::ALL.map(|kind| kind.as_str()),
            ["ETag", "Last-Modified"]
        );
    }
}
