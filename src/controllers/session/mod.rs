pub mod errors;
pub mod ports;
#[allow(clippy::module_inception)]
pub mod session;
pub mod state;

pub use errors::SessionError;
pub use ports::render_request_port::RenderRequestPort;
pub use session::FractalSession;
pub use state::SessionState;
