pub mod metadata;
pub mod pool;

pub use metadata::*;
pub use pool::*;
