//! Pure state and browser glue shared by the sections.

pub mod carousel;
pub mod config;
pub mod format;
pub mod inquiry;
pub mod platform;
pub mod reveal;
pub mod timing;
