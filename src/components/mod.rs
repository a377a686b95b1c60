//! UI components.

pub mod party_popper;
