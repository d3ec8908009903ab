//! Trendline annotation aggregate: entities, hit-test geometry and the store.

pub mod entities;
pub mod geometry;
pub mod store;
pub mod value_objects;

pub use entities::*;
pub use geometry::*;
pub use store::*;
pub use value_objects::*;
