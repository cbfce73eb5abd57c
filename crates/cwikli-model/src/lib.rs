pub mod entry;
pub mod error;
pub mod notes;

pub use entry::*;
pub use error::*;
