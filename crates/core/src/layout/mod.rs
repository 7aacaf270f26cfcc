//! Layout module for page content.
//!
//! This module contains:
//! - Content units (Block, BlockContent, ImageBlock)
//! - Reading order sorting
//! - Interval and band clustering

pub mod block;
pub mod clustering;
pub mod reading_order;

pub use block::{Block, BlockContent, ImageBlock};
pub use clustering::{Interval, cluster_bands, merge_intervals};
pub use reading_order::{reading_order, sort_in_reading_order};
