use chemkit_core::{ChemError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::cache::{CacheConfig, CacheStats, ExpiringCache};
use crate::clock::{Clock, SystemClock};

const DOI_PREFIXES: [&str; 6] = [
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi.org/",
    "doi:",
];

/// Bibliographic record returned for a DOI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoiMetadata {
    /// Normalized DOI.
    pub doi: String,
    /// Work title.
    pub title: String,
    /// Author names in publication order.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Container title (journal, proceedings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Backend able to look up metadata for a normalized DOI.
pub trait MetadataSource {
    /// Fetches metadata for `doi`, which is already normalized.
    fn fetch(&self, doi: &str) -> Result<DoiMetadata, ChemError>;
}

impl<F> MetadataSource for F
where
    F: Fn(&str) -> Result<DoiMetadata, ChemError>,
{
    fn fetch(&self, doi: &str) -> Result<DoiMetadata, ChemError> {
        self(doi)
    }
}

fn invalid_doi(raw: &str, message: &str) -> ChemError {
    ChemError::Cache(
        ErrorInfo::new("invalid-doi", message)
            .with_context("doi", raw)
            .with_hint("expected the form 10.<registrant>/<suffix>"),
    )
}

/// Canonicalizes a DOI: strips resolver URLs and `doi:` prefixes and lowercases.
pub fn normalize_doi(raw: &str) -> Result<String, ChemError> {
    let trimmed = raw.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let mut doi = lowered.as_str();
    for prefix in DOI_PREFIXES {
        if let Some(rest) = doi.strip_prefix(prefix) {
            doi = rest.trim_start();
            break;
        }
    }

    let Some(body) = doi.strip_prefix("10.") else {
        return Err(invalid_doi(raw, "DOI must start with the 10. directory prefix"));
    };
    let Some((registrant, suffix)) = body.split_once('/') else {
        return Err(invalid_doi(raw, "DOI is missing the registrant/suffix separator"));
    };
    if registrant.is_empty() || !registrant.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        return Err(invalid_doi(raw, "DOI registrant code must be numeric"));
    }
    if suffix.is_empty() || suffix.chars().any(char::is_whitespace) {
        return Err(invalid_doi(raw, "DOI suffix must be non-empty and contain no whitespace"));
    }
    Ok(doi.to_string())
}

/// Front-end serving DOI lookups from an [`ExpiringCache`] before falling back
/// to a [`MetadataSource`].
#[derive(Debug)]
pub struct DoiResolver<S, C = SystemClock> {
    source: S,
    clock: C,
    cache: ExpiringCache<String, DoiMetadata>,
}

impl<S: MetadataSource> DoiResolver<S, SystemClock> {
    /// Resolver using the system clock.
    pub fn new(source: S, config: &CacheConfig) -> Result<Self, ChemError> {
        Self::with_clock(source, SystemClock, config)
    }
}

impl<S: MetadataSource, C: Clock> DoiResolver<S, C> {
    /// Resolver using a caller supplied clock.
    pub fn with_clock(source: S, clock: C, config: &CacheConfig) -> Result<Self, ChemError> {
        Ok(Self {
            source,
            clock,
            cache: ExpiringCache::new(config)?,
        })
    }

    /// Resolves `raw`, serving fresh cached records without touching the source.
    ///
    /// Source failures propagate unchanged and are never cached.
    pub fn resolve(&mut self, raw: &str) -> Result<DoiMetadata, ChemError> {
        let doi = normalize_doi(raw)?;
        let now = self.clock.now();
        if let Some(hit) = self.cache.get(&doi, now) {
            log::debug!("doi cache hit for {doi}");
            return Ok(hit.clone());
        }

        log::debug!("doi cache miss for {doi}, querying source");
        let mut metadata = self.source.fetch(&doi)?;
        metadata.doi = doi.clone();
        self.cache.insert(doi, metadata.clone(), now);
        Ok(metadata)
    }

    /// Cache activity counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drops expired records and returns how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        self.cache.purge_expired(now)
    }

    /// Underlying cache.
    pub fn cache(&self) -> &ExpiringCache<String, DoiMetadata> {
        &self.cache
    }
}
