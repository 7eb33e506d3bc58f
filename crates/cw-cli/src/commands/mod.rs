pub mod play;
pub mod stats;
