// Crate root library declaration and module exports.
rust_i18n::i18n!("locales", fallback = "en");

pub mod cli;
pub mod clock;
pub mod config;
pub mod context;
pub mod locale;
pub mod model;
pub mod pagination;
pub mod pipeline;
pub mod projector;
pub mod render;
pub mod storage;
pub mod telemetry;
