//! Domain models for the robodoc system.

mod medicine;
mod recommendation;
mod user;

pub use medicine::*;
pub use recommendation::*;
pub use user::*;
