//! WHOIS response conversion.

use chrono::{DateTime, Utc};
use whois_service::WhoisResponse;

use crate::lookup::WhoisRecord;

/// Converts a whois-service response into a [`WhoisRecord`].
///
/// Dates that cannot be parsed are dropped; the signals treat a missing date
/// as a failed lookup.
pub(crate) fn convert_response(response: &WhoisResponse) -> WhoisRecord {
    let Some(parsed) = &response.parsed_data else {
        return WhoisRecord::default();
    };

    WhoisRecord {
        creation_date: parsed.creation_date.as_deref().and_then(parse_whois_date),
        expiration_date: parsed.expiration_date.as_deref().and_then(parse_whois_date),
        registrar: parsed.registrar.clone(),
    }
}

/// Parses a registry date in RFC 3339 or one of the common WHOIS formats.
pub(crate) fn parse_whois_date(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
        "%Y.%m.%d",
    ];

    for format in &formats {
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

// Building a full WhoisResponse requires the whois-service crate's own types,
// so conversion is exercised through parse_whois_date.
