#![deny(missing_docs)]
#![doc = "Bounded, insertion-ordered metadata cache with wall-clock expiry and a DOI resolver front-end that serves lookups from it."]

/// Bounded cache with expiry.
pub mod cache;
/// Wall-clock abstraction used for expiry checks.
pub mod clock;
/// DOI normalization and cached resolution.
pub mod resolver;

pub use cache::{CacheConfig, CacheStats, ExpiringCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use resolver::{normalize_doi, DoiMetadata, DoiResolver, MetadataSource};
