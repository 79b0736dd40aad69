pub mod interactive;
pub mod session;
