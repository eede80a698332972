//! Portfolio UI components
//!
//! Components and hooks shared by the portfolio pages: buttons, animated
//! form fields, the submit status line, the spinning brand cube and the
//! lifecycle hooks that drive timelines from the frame loop.

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::{
    use_binding_host, use_bound_element, use_frame_loop, use_timeline, use_viewport_watch,
    BoundElement, ViewportReport, FRAME_INTERVAL,
};
