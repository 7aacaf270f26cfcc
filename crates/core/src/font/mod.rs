//! Document-wide font metrics.

pub mod profile;

pub use profile::{DEFAULT_LINE_HEIGHT_RATIO, FontMetrics, FontProfile};
