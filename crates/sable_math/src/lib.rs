// Re-export glam for convenience
pub use glam::*;

// Sable math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;
