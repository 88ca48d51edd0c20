pub mod common;
pub mod copy;
pub mod creative;

pub use common::*;
pub use copy::*;
pub use creative::*;
