// Reusable components live here.

pub mod error_banner;
pub mod footer;
pub mod header;
pub mod preview;
pub mod recovery_prompt;
pub mod tag_input;
