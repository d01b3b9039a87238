pub mod analysis;
pub mod daytime;
pub mod duration;
pub mod intervals;
pub mod loader;
pub mod normalize;
