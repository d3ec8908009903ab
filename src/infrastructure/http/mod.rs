pub mod annotation_sync;
pub mod market_feed;

pub use annotation_sync::*;
pub use market_feed::*;
