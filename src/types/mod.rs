mod page;
mod result;

pub use page::Page;
pub use result::{HeaderHandle, ItemHandle, MatchPriority, ScoredResult, Slot, VisibleItem};
