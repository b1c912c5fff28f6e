// Library exports for percolate
pub mod error;
pub mod percolation;
pub mod quick_find;

pub use error::PercolationError;
pub use percolation::Percolation;
pub use quick_find::QuickFind;
