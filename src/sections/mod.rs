//! Password analysis sections
//!
//! Each section analyzes a specific aspect of the password and returns a
//! typed report. Sections are pure functions of their input with no
//! dependencies between them, so they may run in any order.

mod complexity;
mod entropy;
mod length;
mod pattern;

pub use complexity::complexity_section;
pub use entropy::entropy_section;
pub use length::length_section;
pub use pattern::pattern_section;
