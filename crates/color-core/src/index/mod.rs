//! Spatial index for nearest-color queries
//!
//! [`KdTree`] ranks by plain Euclidean distance in Lab. That metric is only
//! an approximation of perceived difference; callers that need to report
//! match quality use [`Lab::ciede2000`](crate::Lab::ciede2000) on the
//! results instead of re-ranking them.

mod best;
mod kdtree;

pub use kdtree::{KdTree, Neighbor};
