pub mod log;

pub use log::read_log;
