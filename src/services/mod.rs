pub mod clock;
pub mod collect_service;

pub use clock::{Clock, SystemClock};
pub use collect_service::CollectService;
