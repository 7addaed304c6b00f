//! Chat-style presentation flow for RoboDoc.
//!
//! Turns matcher output into what the user sees: page navigation, the
//! assistant's narrative, and one card per recommended medicine. The
//! analysis step runs behind an injectable async delay.

pub mod analysis;
pub mod card;
pub mod narrative;
pub mod session;

pub use analysis::*;
pub use card::MedicineCard;
pub use session::*;
