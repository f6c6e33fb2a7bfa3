pub mod emitter;
pub mod error;
pub mod input;
pub mod logging;
pub mod mapping;
pub mod source;
pub mod turtle;
pub mod types;
