pub mod alternate;
pub mod chart;
pub mod gate;
pub mod intervals;
pub mod note;
pub mod stats;
pub mod timing;
