// File: ./src/model/mod.rs
pub mod display;
pub mod event;
pub mod parser;

pub use display::{DateFormatter, EventDisplay, IsoDateFormatter, LocaleDateFormatter};
pub use event::{DisplayEvent, RawEvent};
pub use parser::{PointInTime, parse_date};
