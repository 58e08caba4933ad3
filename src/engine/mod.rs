//! Command construction for the external audio tool

pub mod command;
pub mod filter;

pub use command::{silence_removal_command, version_query, FfmpegCommand};
pub use filter::build_silence_filter;
