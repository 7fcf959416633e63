//! Client-side catalog engine for the gift market.
//!
//! Owns the deduplicated gift dataset for a session, derives a filtered and
//! sorted view from the current [`FilterState`], and releases that view to
//! the display layer one page at a time.
//!
//! ```no_run
//! use catalog_engine::{CatalogEngine, EngineConfig, FilterPatch, SortKey};
//!
//! let mut engine = CatalogEngine::new(EngineConfig::default());
//! engine.load_json(br#"[{"name": "Ice Cream #1", "collection": "icecream", "id": "1"}]"#);
//! engine.set_filter_state(FilterPatch::default().search("ice").sort(SortKey::PriceAsc));
//! while engine.has_more() {
//!     engine.load_more();
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod search;
pub mod selector;
pub mod source;
pub mod state;

pub use config::EngineConfig;
pub use engine::{CatalogEngine, ComputedView, LoadTicket};
pub use error::CatalogError;
pub use state::{CatalogView, EngineStatus, FilterPatch, FilterState, SortKey};
