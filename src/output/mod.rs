pub mod json;
pub mod xml;

pub use json::write_json;
pub use xml::write_feed;
