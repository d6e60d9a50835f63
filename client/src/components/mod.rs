//! Reusable UI component modules.

pub mod notice;
pub mod spinner;
