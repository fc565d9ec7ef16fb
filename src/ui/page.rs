/// Upload-and-explain page
///
/// One generic screen drives both the Solution and the Check views. The
/// result type picks the endpoint (via `AnalysisResult`) and how steps and
/// knowledge points are drawn (via `ResultSections`).

use iced::widget::{
    self, button, canvas, column, container, horizontal_space, row, scrollable, stack, text,
};
use iced::{Alignment, ContentFit, Element, Length, Task};
use tracing::debug;

use super::collapse::collapse;
use super::error_modal::error_modal;
use super::spinner::Spinner;
use super::{MUTED, RED};
use crate::api::SolverClient;
use crate::error::{ImageError, SubmitError};
use crate::state::data::AnalysisResult;
use crate::state::image::{pick_image, UploadedImage};
use crate::state::panels::Section;
use crate::state::submission::Submission;

/// How a result type is laid out on the page
pub trait ResultSections: AnalysisResult {
    /// Heading of the steps column
    const STEPS_TITLE: &'static str;

    /// Title of the knowledge panel of question `question` (zero-based)
    fn knowledge_panel_title(question: usize) -> String;

    /// Body of the steps panel of one question
    fn steps<'a, M: 'a>(&'a self, question: usize) -> Element<'a, M>;

    /// Body of the knowledge panel of one question
    fn knowledge<'a, M: 'a>(&'a self, question: usize) -> Element<'a, M>;
}

#[derive(Debug, Clone)]
pub enum PageMessage<R> {
    PickImage,
    /// `None` when the dialog was cancelled
    ImagePicked(Option<Result<UploadedImage, ImageError>>),
    ClearImage,
    Submit,
    Finished(Result<R, SubmitError>),
    TogglePanel(Section, usize),
    DismissError,
}

#[derive(Debug)]
pub struct Page<R> {
    submission: Submission<R>,
}

impl<R: ResultSections> Default for Page<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ResultSections> Page<R> {
    pub fn new() -> Self {
        Self {
            submission: Submission::new(),
        }
    }

    pub fn submission(&self) -> &Submission<R> {
        &self.submission
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn update(&mut self, message: PageMessage<R>, client: &SolverClient) -> Task<PageMessage<R>> {
        let task = self.apply(message, client);
        debug!("{} page is now {:?}", R::ENDPOINT, self.submission.phase());
        task
    }

    fn apply(&mut self, message: PageMessage<R>, client: &SolverClient) -> Task<PageMessage<R>> {
        match message {
            PageMessage::PickImage => Task::perform(pick_image(), PageMessage::ImagePicked),
            PageMessage::ImagePicked(Some(Ok(image))) => {
                self.submission.select_image(image);
                Task::none()
            }
            PageMessage::ImagePicked(Some(Err(e))) => {
                self.submission.reject_image(e);
                Task::none()
            }
            PageMessage::ImagePicked(None) => Task::none(),
            PageMessage::ClearImage => {
                self.submission.clear_image();
                Task::none()
            }
            PageMessage::Submit => match self.submission.begin_submit() {
                Some(image) => {
                    let client = client.clone();
                    Task::perform(
                        async move { client.submit::<R>(image).await },
                        PageMessage::Finished,
                    )
                }
                None => Task::none(),
            },
            PageMessage::Finished(outcome) => {
                self.submission.finish(outcome);
                Task::none()
            }
            PageMessage::TogglePanel(section, question) => {
                self.submission.toggle_panel(section, question);
                Task::none()
            }
            PageMessage::DismissError => {
                self.submission.dismiss_error();
                Task::none()
            }
        }
    }

    /// Build the page; `rotation` animates the spinner while loading
    pub fn view(&self, rotation: f32) -> Element<'_, PageMessage<R>> {
        let content = row![
            self.view_upload(),
            self.view_section(Section::Steps, R::STEPS_TITLE, "上传题目后，AI将在这里展示解题思路", rotation),
            self.view_section(Section::Knowledge, "相关知识点", "上传题目后，AI将在这里展示相关知识点", rotation),
        ]
        .spacing(16)
        .width(Length::Fill)
        .height(Length::Fill);

        match self.submission.error_modal() {
            Some(message) => stack![content, error_modal(message, PageMessage::DismissError)].into(),
            None => content.into(),
        }
    }

    fn view_upload(&self) -> Element<'_, PageMessage<R>> {
        let picker: Element<'_, PageMessage<R>> = match self.submission.image() {
            Some(image) => stack![
                widget::image(image.preview.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(300.0))
                    .content_fit(ContentFit::Contain),
                row![
                    horizontal_space(),
                    button(text("✕").size(14))
                        .on_press(PageMessage::ClearImage)
                        .style(button::secondary),
                ]
                .padding(8),
            ]
            .into(),
            None => button(
                container(
                    column![text("+").size(40).color(MUTED), text("点击这里上传图片").color(MUTED)]
                        .spacing(8)
                        .align_x(Alignment::Center),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fixed(200.0)),
            )
            .on_press(PageMessage::PickImage)
            .width(Length::Fill)
            .style(button::secondary)
            .into(),
        };

        let label = if self.submission.is_loading() { "解析中..." } else { "开始解题" };
        let submit = button(container(text(label)).center_x(Length::Fill))
            .on_press_maybe(self.submission.can_submit().then_some(PageMessage::Submit))
            .width(Length::Fill)
            .padding(12)
            .style(button::primary);

        let mut upload = column![text("上传题目").size(24), picker, submit].spacing(16);
        if let Some(error) = self.submission.error() {
            upload = upload.push(text(error).color(RED));
        }

        card(upload)
    }

    fn view_section(
        &self,
        section: Section,
        title: &'static str,
        placeholder: &'static str,
        rotation: f32,
    ) -> Element<'_, PageMessage<R>> {
        let heading = text(title).size(24);

        let body: Element<'_, PageMessage<R>> = if self.submission.is_loading() {
            container(
                canvas(Spinner::new(rotation))
                    .width(Length::Fixed(40.0))
                    .height(Length::Fixed(40.0)),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fixed(128.0))
            .into()
        } else if let Some(result) = self.submission.result() {
            let panels = (0..result.question_count()).map(|question| {
                let (title, body) = match section {
                    Section::Steps => (format!("第{}问", question + 1), result.steps(question)),
                    Section::Knowledge => (
                        R::knowledge_panel_title(question),
                        result.knowledge(question),
                    ),
                };
                collapse(
                    title,
                    self.submission.panels().is_open(section, question),
                    body,
                    PageMessage::TogglePanel(section, question),
                )
            });
            scrollable(column(panels).spacing(12).padding([0, 8]))
                .height(Length::Fill)
                .into()
        } else {
            container(text(placeholder).color(MUTED))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(192.0))
                .into()
        };

        card(column![heading, body].spacing(16))
    }
}

/// Rounded column taking an equal share of the row
fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// Numbered step row shared by both result renderings
pub fn step_row<'a, M: 'a>(
    index: usize,
    content: &'a str,
    color: Option<iced::Color>,
) -> Element<'a, M> {
    let mut number = text((index + 1).to_string()).size(16);
    let mut body = text(content).size(16);
    if let Some(color) = color {
        number = number.color(color);
        body = body.color(color);
    }

    row![
        container(number).center_x(Length::Fixed(32.0)),
        body.width(Length::Fill),
    ]
    .spacing(12)
    .align_y(Alignment::Start)
    .into()
}
