pub use crate::board::*;
pub use crate::error::*;
pub use crate::heuristic::*;
pub use crate::scramble::*;
pub use crate::search::*;
pub use crate::worker::*;

#[cfg(test)]
pub use crate::test::*;

pub use std::time::Duration;
