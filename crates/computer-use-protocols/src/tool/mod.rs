//! Tool protocol definitions.
//!
//! A tool is the unit an agent invokes to act on the machine.

mod traits;
mod definition;
mod context;
mod result;

pub use traits::*;
pub use definition::*;
pub use context::*;
pub use result::*;
