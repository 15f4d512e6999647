//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the guarded dashboard chrome and the study tools. They
//! read the auth manager from context and own their local state machines
//! through signals.

pub mod file_upload_zone;
pub mod flashcard_settings;
pub mod flashcard_viewer;
pub mod protected_route;
pub mod quiz_settings;
pub mod quiz_taker;
pub mod sidebar;
pub mod time_selector;
