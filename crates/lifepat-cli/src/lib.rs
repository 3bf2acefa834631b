//! Library components for the `lifepat` command-line editor.

pub mod logging;
pub mod ops;
pub mod output;
pub mod settings;
pub mod summary;
