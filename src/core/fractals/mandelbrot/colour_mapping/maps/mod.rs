pub mod fire;
pub mod ocean;
pub mod oscilloscope;
pub mod rainbow;
