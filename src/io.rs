//! Retrieval of bogon lists and delegated stats from local files or URLs.
use crate::error::SlurmError;
use crate::source::BogonSource;
use log::{debug, info};

pub const IPV4_FULLBOGONS_URL: &str =
    "https://www.team-cymru.org/Services/Bogons/fullbogons-ipv4.txt";
pub const IPV6_FULLBOGONS_URL: &str =
    "https://www.team-cymru.org/Services/Bogons/fullbogons-ipv6.txt";
pub const DELEGATED_STATS_URL: &str =
    "https://www.nro.net/wp-content/uploads/apnic-uploads/delegated-extended";

/// Locations of the data sources, local paths or URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls {
    pub ipv4_bogons: String,
    pub ipv6_bogons: String,
    pub delegated_stats: String,
}

impl Default for SourceUrls {
    fn default() -> Self {
        SourceUrls {
            ipv4_bogons: IPV4_FULLBOGONS_URL.to_string(),
            ipv6_bogons: IPV6_FULLBOGONS_URL.to_string(),
            delegated_stats: DELEGATED_STATS_URL.to_string(),
        }
    }
}

/// Read the whole content of a local or remote file, decompressing it by file extension.
pub fn fetch_text(url: &str) -> Result<String, SlurmError> {
    info!("retrieving {}", url);
    let text = oneio::read_to_string(url).map_err(|e| SlurmError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    debug!("retrieved {} bytes from {}", text.len(), url);
    Ok(text)
}

/// Drop the leading comment line and the trailing empty line of a full bogon list.
///
/// ```text
/// # last updated 1581670201 (Fri Feb 14 08:50:01 2020 GMT)
/// 0.0.0.0/8
/// 10.0.0.0/8
/// ```
pub fn strip_bogon_list_envelope(text: &str) -> &str {
    let body = match text.split_once('\n') {
        Some((_comment, body)) => body,
        None => "",
    };
    body.strip_suffix('\n').unwrap_or(body)
}

/// Retrieve the raw text of either both full bogon lists or the delegated stats.
pub fn fetch_source(use_delegated_stats: bool, urls: &SourceUrls) -> Result<BogonSource, SlurmError> {
    if use_delegated_stats {
        let data = fetch_text(&urls.delegated_stats)?;
        Ok(BogonSource::DelegatedStats(data))
    } else {
        let ipv4 = fetch_text(&urls.ipv4_bogons)?;
        let ipv6 = fetch_text(&urls.ipv6_bogons)?;
        Ok(BogonSource::FullBogons {
            ipv4: strip_bogon_list_envelope(&ipv4).to_string(),
            ipv6: strip_bogon_list_envelope(&ipv6).to_string(),
        })
    }
}
