//! Reusable UI components

mod button;
mod input;
mod spinning_cube;
mod status_line;

pub use button::{Button, ButtonVariant, LinkButton};
pub use input::FormField;
pub use spinning_cube::{face_transform, PreviewSolid, SpinningCube};
pub use status_line::{status_class, StatusLine};
