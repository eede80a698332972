//! Motion primitives: easing, timelines, interaction bindings and
//! one-shot scroll reveals.
//!
//! Nothing here touches the DOM. A UI layer drives these types from a frame
//! loop and turns the resulting [`Pose`]s into inline styles.

pub mod binding;
pub mod ease;
pub mod presets;
pub mod reveal;
pub mod timeline;

pub use binding::{BindingHost, Disposer, InteractionBinding};
pub use ease::Ease;
pub use reveal::{RevealOnce, REVEAL_THRESHOLD};
pub use timeline::{Playback, Pose, Position, Property, Timeline, Tween};
