mod interface;
mod os;
mod strategy;

pub use interface::*;
pub use os::*;
pub use strategy::*;
