/// Solution view rendering
/// Steps are plain numbered rows; knowledge points carry an importance badge
use iced::widget::{column, container, horizontal_space, row, text};
use iced::{Alignment, Border, Color, Element, Length};

use super::page::{step_row, ResultSections};
use super::{GREEN, RED, YELLOW};
use crate::state::data::{Importance, SolutionKnowledge, SolutionResult};

impl Importance {
    pub fn label(self) -> &'static str {
        match self {
            Importance::High => "重要",
            Importance::Medium => "中等",
            Importance::Low => "普通",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Importance::High => RED,
            Importance::Medium => YELLOW,
            Importance::Low => GREEN,
        }
    }
}

impl ResultSections for SolutionResult {
    const STEPS_TITLE: &'static str = "解题步骤";

    fn knowledge_panel_title(question: usize) -> String {
        format!("第{}问", question + 1)
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
                .map(|(index, step)| step_row(index, &step.content, None)),
        )
        .spacing(8)
        .into()
    }

    fn knowledge<'a, M: 'a>(&'a self, question: usize) -> Element<'a, M> {
        let Some(question) = self.questions.get(question) else {
            return column![].into();
        };

        column(question.knowledge.iter().map(knowledge_card))
            .spacing(12)
            .into()
    }
}

fn knowledge_card<'a, M: 'a>(item: &'a SolutionKnowledge) -> Element<'a, M> {
    let color = item.importance.color();

    let badge = container(text(item.importance.label()).size(12).color(color))
        .padding([2, 8])
        .style(move |_theme| container::Style {
            background: Some(Color { a: 0.15, ..color }.into()),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    container(
        column![
            row![text(&item.category).size(15), horizontal_space(), badge].align_y(Alignment::Center),
            text(&item.content).size(14),
        ]
        .spacing(8),
    )
    .padding(12)
    .width(Length::Fill)
    .style(move |_theme| container::Style {
        border: Border {
            color,
            width: 1.5,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    })
    .into()
}
