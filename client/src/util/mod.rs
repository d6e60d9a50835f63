//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and state
//! logic so the same code renders on the server and in the browser.

pub mod clock;
pub mod storage;
