pub mod annotations;
pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod surface;
