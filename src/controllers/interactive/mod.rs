//! Background rendering for interactive front ends.
//!
//! A single worker thread renders the most recent [`RenderRequest`] and
//! reports progress, frames and failures through an
//! [`InteractiveControllerPresenterPort`]. Submitting a newer request cancels
//! the one in flight.

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_failure::RenderFailure;
pub use data::render_request::RenderRequest;
pub use events::render_event::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
