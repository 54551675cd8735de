//! Year-range compaction.
//!
//! Collapses the seasons a team competed in into inclusive runs so they can
//! be shown compactly, e.g. `2019-2021, 2023`.

mod entry;
mod error;
mod range;

pub use entry::YearEntry;
pub use error::InvalidInputError;
pub use range::{compact, format, format_default, try_compact, Range};

/// Separator used by [`format_default`].
pub const DEFAULT_SEPARATOR: &str = ", ";
