pub mod core;
pub mod selfplay;
