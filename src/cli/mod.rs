pub mod commands;
pub mod logging;
pub mod options;

pub use commands::*;
pub use logging::*;
pub use options::*;
