/// The submit-image-for-result state machine
///
/// Shared by the Solution and Check pages; the result type `R` decides
/// which endpoint is called and how the response is parsed.
///
/// ```text
/// Idle ──select──▶ ImageSelected ──submit──▶ Submitting ──ok──▶ Success
///   ▲                   │                        │
///   └──────clear────────┘                        └──err──▶ Failure
/// ```
/// Success and Failure go back to Submitting on the next submit.

use tracing::{debug, info, warn};

use super::data::AnalysisResult;
use super::image::UploadedImage;
use super::panels::{ResultPanels, Section};
use crate::error::{ImageError, SubmitError};

/// Inline error shown when submitting with no image
pub const NO_IMAGE_MESSAGE: &str = "请先上传题目图片";
/// Fallback text for the error modal
pub const UNKNOWN_ERROR_MESSAGE: &str = "未知错误";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ImageSelected,
    Submitting,
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct Submission<R> {
    image: Option<UploadedImage>,
    loading: bool,
    result: Option<R>,
    /// Local error: guard, image selection or transport failure
    error: Option<String>,
    show_error_modal: bool,
    /// Set by a transport failure, cleared by the next submit
    failed: bool,
    panels: ResultPanels,
}

impl<R> Default for Submission<R> {
    fn default() -> Self {
        Self {
            image: None,
            loading: false,
            result: None,
            error: None,
            show_error_modal: false,
            failed: false,
            panels: ResultPanels::default(),
        }
    }
}

impl<R: AnalysisResult> Submission<R> {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Transitions ==========

    /// A file was picked; any previous local error goes away
    pub fn select_image(&mut self, image: UploadedImage) {
        self.image = Some(image);
        self.error = None;
    }

    /// The picked file could not be used
    pub fn reject_image(&mut self, error: ImageError) {
        warn!("⚠️  Image rejected: {}", error);
        self.error = Some(error.to_string());
    }

    /// Drop the picked image; the last result stays on screen
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Start a submission.
    ///
    /// Returns the image to send, or `None` when nothing must be sent:
    /// no image is selected (sets the inline error) or a request is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<UploadedImage> {
        if self.loading {
            debug!("Submit ignored, a request is already in flight");
            return None;
        }

        let Some(image) = self.image.clone() else {
            self.error = Some(NO_IMAGE_MESSAGE.to_string());
            return None;
        };

        self.loading = true;
        self.result = None;
        self.error = None;
        self.show_error_modal = false;
        self.failed = false;
        self.panels.clear();

        info!("📤 Submitting {} to {}", image.file_name, R::ENDPOINT);
        Some(image)
    }

    /// The request finished, successfully or not
    pub fn finish(&mut self, outcome: Result<R, SubmitError>) {
        if !self.loading {
            debug!("Dropping response for {}: no submission in flight", R::ENDPOINT);
            return;
        }
        self.loading = false;

        match outcome {
            Ok(result) => {
                if let Some(message) = result.other_error() {
                    warn!("⚠️  {} reported an error: {}", R::ENDPOINT, message);
                    self.show_error_modal = true;
                }
                info!("✅ {} returned {} questions", R::ENDPOINT, result.question_count());
                self.panels = ResultPanels::new(result.question_count());
                self.result = Some(result);
            }
            Err(e) => {
                warn!("❌ {} failed: {}", R::ENDPOINT, e);
                self.error = Some(format!("上传失败: {}", e));
                self.failed = true;
                self.show_error_modal = true;
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.show_error_modal = false;
    }

    pub fn toggle_panel(&mut self, section: Section, question: usize) {
        self.panels.toggle(section, question);
    }

    // ========== Queries ==========

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else if self.failed {
            Phase::Failure
        } else if self.result.is_some() {
            Phase::Success
        } else if self.image.is_some() {
            Phase::ImageSelected
        } else {
            Phase::Idle
        }
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn panels(&self) -> &ResultPanels {
        &self.panels
    }

    /// Submit is offered only with an image and no request in flight
    pub fn can_submit(&self) -> bool {
        self.image.is_some() && !self.loading
    }

    /// Message for the error modal, or `None` while it is hidden.
    ///
    /// A backend-reported error wins over the local one.
    pub fn error_modal(&self) -> Option<&str> {
        if !self.show_error_modal {
            return None;
        }

        let message = self
            .result
            .as_ref()
            .and_then(|result| result.other_error())
            .or(self.error.as_deref())
            .unwrap_or(UNKNOWN_ERROR_MESSAGE);
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{CheckResult, SolutionResult};
    use crate::state::fixtures::{check_json, solution_json, PNG_HEADER};

    fn png(name: &str) -> UploadedImage {
        UploadedImage::from_bytes(name, PNG_HEADER.to_vec()).unwrap()
    }

    fn solution() -> SolutionResult {
        serde_json::from_value(solution_json()).unwrap()
    }

    #[test]
    fn test_submit_without_image_is_rejected() {
        let mut submission = Submission::<SolutionResult>::new();

        assert!(submission.begin_submit().is_none());
        assert_eq!(submission.error(), Some(NO_IMAGE_MESSAGE));
        assert!(!submission.is_loading());
        assert_eq!(submission.phase(), Phase::Idle);
        // Guard errors are inline only
        assert_eq!(submission.error_modal(), None);
    }

    #[test]
    fn test_select_clears_local_error() {
        let mut submission = Submission::<CheckResult>::new();
        submission.begin_submit();
        assert!(submission.error().is_some());

        submission.select_image(png("a.png"));
        assert_eq!(submission.error(), None);
        assert_eq!(submission.phase(), Phase::ImageSelected);

        submission.clear_image();
        assert_eq!(submission.phase(), Phase::Idle);
    }

    #[test]
    fn test_successful_submission() {
        let mut submission = Submission::<SolutionResult>::new();
        submission.select_image(png("a.png"));

        let image = submission.begin_submit().unwrap();
        assert_eq!(image.file_name, "a.png");
        assert_eq!(submission.phase(), Phase::Submitting);
        assert!(!submission.can_submit());

        submission.finish(Ok(solution()));
        assert_eq!(submission.phase(), Phase::Success);
        assert!(!submission.is_loading());
        assert_eq!(submission.error_modal(), None);
        assert_eq!(submission.result().unwrap().questions.len(), 2);
    }

    #[test]
    fn test_fixture_creates_closed_panels_per_question() {
        let mut submission = Submission::<CheckResult>::new();
        submission.select_image(png("a.png"));
        submission.begin_submit();
        submission.finish(Ok(serde_json::from_value(check_json()).unwrap()));

        let panels = submission.panels();
        assert_eq!(panels.section(Section::Steps).len(), 2);
        assert_eq!(panels.section(Section::Knowledge).len(), 2);
        assert!(panels.section(Section::Steps).iter().all(|p| !p.is_open()));
        assert!(panels.section(Section::Knowledge).iter().all(|p| !p.is_open()));
    }

    #[test]
    fn test_domain_error_shows_modal_verbatim() {
        let mut submission = Submission::<SolutionResult>::new();
        submission.select_image(png("a.png"));
        submission.begin_submit();

        let mut result = solution();
        result.other_error = Some("无法识别题目".to_string());
        submission.finish(Ok(result));

        assert_eq!(submission.error_modal(), Some("无法识别题目"));
        // Domain errors never reach the inline error
        assert_eq!(submission.error(), None);
        assert_eq!(submission.phase(), Phase::Success);

        submission.dismiss_error();
        assert_eq!(submission.error_modal(), None);
    }

    #[test]
    fn test_transport_error_shows_modal_and_inline() {
        let mut submission = Submission::<SolutionResult>::new();
        submission.select_image(png("a.png"));
        submission.begin_submit();
        submission.finish(Err(SubmitError::Status { status: 500 }));

        assert_eq!(submission.phase(), Phase::Failure);
        let modal = submission.error_modal().unwrap();
        assert!(modal.starts_with("上传失败: "));
        assert!(modal.contains("500"));
        assert_eq!(submission.error(), Some(modal));
        assert!(submission.can_submit());
    }

    #[test]
    fn test_resubmit_resets_previous_outcome() {
        let mut submission = Submission::<SolutionResult>::new();
        submission.select_image(png("a.png"));
        submission.begin_submit();
        submission.finish(Err(SubmitError::Network("connection refused".to_string())));

        submission.begin_submit().unwrap();
        assert_eq!(submission.error(), None);
        assert_eq!(submission.error_modal(), None);
        assert!(submission.result().is_none());
        assert_eq!(submission.phase(), Phase::Submitting);
    }

    #[test]
    fn test_reselect_keeps_previous_result() {
        let mut submission = Submission::<SolutionResult>::new();
        submission.select_image(png("a.png"));
        submission.begin_submit();
        submission.finish(Ok(solution()));

        submission.clear_image();
        submission.reject_image(ImageError::NotAnImage("b.txt".to_string()));
        assert!(submission.error().is_some());

        submission.select_image(png("c.png"));
        assert_eq!(submission.error(), None);
        assert_eq!(submission.result(), Some(&solution()));
        assert_eq!(submission.image().unwrap().file_name, "c.png");
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let mut submission = Submission::<SolutionResult>::new();
        submission.select_image(png("a.png"));
        assert!(submission.begin_submit().is_some());
        assert!(submission.begin_submit().is_none());
        assert_eq!(submission.error(), None);
    }

    #[test]
    fn test_late_response_without_submission_is_dropped() {
        let mut submission = Submission::<SolutionResult>::new();
        submission.finish(Ok(solution()));
        assert!(submission.result().is_none());
        assert_eq!(submission.phase(), Phase::Idle);
    }

    #[test]
    fn test_toggle_panel_after_result() {
        let mut submission = Submission::<SolutionResult>::new();
        submission.select_image(png("a.png"));
        submission.begin_submit();
        submission.finish(Ok(solution()));

        submission.toggle_panel(Section::Knowledge, 0);
        assert!(submission.panels().is_open(Section::Knowledge, 0));
        assert!(!submission.panels().is_open(Section::Steps, 0));
    }
}
