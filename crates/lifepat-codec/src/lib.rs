//! Plain-text pattern codec.
//!
//! Patterns are written one grid row per line, with `O` for alive cells and
//! `.` for dead ones. Decoding also accepts `#`, `*` and `0` as alive glyphs.
//!
//! # Example
//!
//! ```
//! use lifepat_codec::{decode, encode};
//! use lifepat_model::GridDims;
//!
//! let dims = GridDims::new(4, 4).unwrap();
//! let cells = decode("O.\n.O", dims).unwrap();
//! assert_eq!(encode(&cells).block(), Some("O.\n.O"));
//! ```

mod decode;
mod encode;
pub mod presets;

pub use decode::{ALIVE_GLYPHS, decode, is_alive_glyph};
pub use encode::{EMPTY_SENTINEL, PatternExport, encode};
pub use presets::{PRESETS, Preset, PresetCategory, find_preset};
