pub mod palette;
pub mod rng;
pub mod spec;
