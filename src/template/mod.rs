pub mod classifier;
pub mod error;
pub mod extractor;
pub mod loader;

pub use classifier::*;
pub use error::*;
pub use extractor::*;
pub use loader::*;
