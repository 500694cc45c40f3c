//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, storage,
//! stylesheet injection) and pure text rendering from panel logic.

pub mod clock;
pub mod format;
pub mod style;
pub mod theme;
