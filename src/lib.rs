//! Relevance engine for externally produced search results.
//!
//! The host owns a page registry and a live result surface filled by its
//! own asynchronous substring search. That search ranks nothing: an exact
//! title hit can drown under hundreds of incidental substring matches,
//! and sometimes it drops exact matches entirely. This crate re-ranks
//! what the host displays instead of replacing its search: it waits for
//! the surface to stop changing, maps rows back to registry pages, drops
//! debris and unresolvable rows, injects the matches the search omitted,
//! scores everything into priority tiers, and commits a grouped order
//! with synthetic section headers.
//!
//! The engine is a pure in-process component with no I/O of its own. It
//! talks to the host exclusively through the [`SearchHost`] trait and is
//! driven by [`Engine::tick`] from whatever cooperative loop the host
//! already runs.

mod category;
mod config;
mod engine;
mod error;
mod host;
mod text;
mod types;

pub use category::{DEFAULT_ICON, OTHER_CATEGORY, icon_for_category};
pub use config::EngineConfig;
pub use engine::{Engine, QueryTrigger};
pub use error::EngineError;
pub use host::SearchHost;
pub use text::strip_markup;
pub use types::{HeaderHandle, ItemHandle, MatchPriority, Page, ScoredResult, Slot, VisibleItem};
