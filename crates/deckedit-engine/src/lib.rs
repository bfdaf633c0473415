pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{
    EditError, Patch,
    commands::{Cmd, CmdOutput},
};
pub use io::*;
pub use models::{NewSlide, SlideSummary};
pub use parsing::{LocatedSlide, SEPARATOR};
