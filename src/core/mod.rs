pub mod codec;
pub mod guests;
pub mod import;
pub mod log;
pub mod selection;
pub mod session;
