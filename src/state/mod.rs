/// State management module
///
/// This module handles all client-side state:
/// - Response payloads and the result trait (data.rs)
/// - The picked problem image (image.rs)
/// - The submit-image-for-result state machine shared by both views (submission.rs)
/// - Collapsible panel state for rendered results (panels.rs)

pub mod data;
pub mod image;
pub mod panels;
pub mod submission;

#[cfg(test)]
pub mod fixtures;
