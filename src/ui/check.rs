/// Check view rendering
/// Steps flagged as mistakes are drawn in red, correct ones in green
use iced::widget::{column, container, text};
use iced::{Border, Element, Length};

use super::page::{step_row, ResultSections};
use super::{GREEN, RED};
use crate::state::data::{CheckResult, CheckStep};

impl CheckStep {
    pub fn color(&self) -> iced::Color {
        if self.is_error {
            RED
        } else {
            GREEN
        }
    }
}

impl ResultSections for CheckResult {
    const STEPS_TITLE: &'static str = "检查解题步骤";

    fn knowledge_panel_title(question: usize) -> String {
        format!("第{}问知识点", question + 1)
    }

    fn steps<'a, M: 'a>(&'a self, question: usize) -> Element<'a, M> {
        let Some(question) = self.questions.get(question) else {
            return column![].into();
        };

        column(
            question
                .steps
                .iter()
                .enumerate()
                .map(|(index, step)| step_row(index, &step.content, Some(step.color()))),
        )
        .spacing(8)
        .into()
    }

    fn knowledge<'a, M: 'a>(&'a self, question: usize) -> Element<'a, M> {
        let Some(question) = self.questions.get(question) else {
            return column![].into();
        };

        column(question.knowledge.iter().map(|item| {
            container(column![text(&item.category).size(15), text(&item.content).size(14)].spacing(8))
                .padding(12)
                .width(Length::Fill)
                .style(|theme| container::Style {
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    ..container::rounded_box(theme)
                })
                .into()
        }))
        .spacing(12)
        .into()
    }
}
