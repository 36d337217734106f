//! Per-domain resource counts, used to credit source organisations.
//!
//! Every resource URL in the store (book-level and story-level) is parsed and
//! counted by hostname with a leading `www.` removed. Hosts matching the
//! blocklist are dropped, as are hosts below the minimum count. URLs that do
//! not parse, or that have no host, are skipped without error.

use std::collections::BTreeMap;

use glob::Pattern;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::content::ContentStore;

/// Placeholder replaced by the hostname in favicon templates
pub const HOST_PLACEHOLDER: &str = "{host}";

/// Rules applied when aggregating domains
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionRules {
    /// Minimum number of resources a host needs to be listed (default: 2)
    #[serde(default = "default_min_count")]
    pub min_count: usize,

    /// Glob patterns over hostnames that are never credited
    #[serde(default = "default_blocklist")]
    pub blocklist: Vec<String>,
}

fn default_min_count() -> usize {
    2
}

/// Archive mirrors host copies of other organisations' work
fn default_blocklist() -> Vec<String> {
    vec!["archive.org".to_string(), "*.archive.org".to_string()]
}

impl Default for AttributionRules {
    fn default() -> Self {
        Self {
            min_count: default_min_count(),
            blocklist: default_blocklist(),
        }
    }
}

impl AttributionRules {
    /// Check if a hostname matches any blocklist pattern
    pub fn is_blocklisted(&self, hostname: &str) -> bool {
        for pattern_str in &self.blocklist {
            if let Ok(pattern) = Pattern::new(pattern_str) {
                if pattern.matches(hostname) {
                    return true;
                }
            }
        }
        false
    }
}

/// One credited domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    /// Hostname without a leading `www.`
    pub hostname: String,

    /// Origin of the first URL seen for this host (scheme, host, port)
    pub origin: String,

    /// Number of resources linking to this host
    pub count: usize,
}

impl DomainCount {
    /// Fill a favicon-service template such as
    /// `https://www.google.com/s2/favicons?domain={host}&sz=64`
    pub fn favicon_url(&self, template: &str) -> String {
        template.replace(HOST_PLACEHOLDER, &self.hostname)
    }
}

/// Hostname and origin of a resource URL, or `None` if it cannot be credited
pub fn parse_domain(raw: &str) -> Option<(String, String)> {
    let url = match Url::parse(raw.trim()) {
        Ok(url) => url,
        Err(e) => {
            debug!(url = raw, error = %e, "Skipping malformed resource URL");
            return None;
        }
    };

    let host = url.host_str()?;
    let hostname = host.strip_prefix("www.").unwrap_or(host);
    if hostname.is_empty() {
        return None;
    }

    Some((hostname.to_string(), url.origin().ascii_serialization()))
}

/// Count resources per domain across the whole store, sorted by hostname
pub fn attribute_domains(store: &ContentStore, rules: &AttributionRules) -> Vec<DomainCount> {
    let mut counts: BTreeMap<String, DomainCount> = BTreeMap::new();

    let urls = store
        .books()
        .iter()
        .flat_map(|book| book.all_resources())
        .map(|resource| resource.url.as_str());

    for (hostname, origin) in urls.filter_map(parse_domain) {
        if rules.is_blocklisted(&hostname) {
            continue;
        }

        counts
            .entry(hostname.clone())
            .or_insert_with(|| DomainCount {
                hostname,
                origin,
                count: 0,
            })
            .count += 1;
    }

    counts
        .into_values()
        .filter(|domain| domain.count >= rules.min_count)
        .collect()
}
