pub mod cell;
pub mod engine;
pub mod grid;
pub mod render;
pub mod stats;

/// Cell coordinate. Signed so neighbour offsets can dip below zero at the
/// board edges.
pub type Coord = i32;

/// Generation counter.
pub type Tick = u64;
