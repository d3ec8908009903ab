//! Chart aggregate containing axis calibration and value objects.

pub mod axes;
pub mod value_objects;

pub use axes::*;
pub use value_objects::*;
