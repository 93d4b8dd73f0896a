mod counter;
mod interface;
mod lock;
pub(crate) mod mutex;

pub use counter::Direction;
pub(crate) use counter::Counter;
pub use interface::*;
pub use lock::*;
