#[macro_use]
mod macros;
mod cuid;
mod guid;
mod interface;
mod prefix;
mod varint;

pub use cuid::*;
pub use guid::*;
pub use interface::*;
pub use prefix::*;

pub(crate) use interface::{check_prefix, sealed};
