pub mod draw;
pub mod spreads;
