pub mod entry;
pub mod source;

pub use entry::{Entry, DEFAULT_TITLE};
pub use source::Source;
