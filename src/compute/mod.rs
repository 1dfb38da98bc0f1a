//! Compute module - Distance metric, stars and the black hole optimizer.

mod black_hole;
mod metric;
mod report;
mod rng;
mod star;

pub use black_hole::*;
pub use metric::*;
pub use report::*;
pub use rng::*;
pub use star::*;
