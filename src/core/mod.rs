pub mod primitives;
pub mod spacing;
pub mod types;

pub use spacing::{SpacingConstraints, cumulative_separation};
pub use types::{TimelineEvent, Viewport};
