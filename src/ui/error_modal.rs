/// Error modal overlay
///
/// Stateless: shows whatever message it is given until the parent stops
/// rendering it. Meant to be the top layer of a `stack!`.

use iced::widget::{button, center, column, container, horizontal_space, opaque, row, text};
use iced::{Alignment, Color, Element, Length};

use super::RED;

pub fn error_modal<'a, Message: Clone + 'a>(message: &'a str, on_close: Message) -> Element<'a, Message> {
    let dialog = container(
        column![
            row![text("⚠").size(24).color(RED), text("处理错误").size(20).color(RED)]
                .spacing(12)
                .align_y(Alignment::Center),
            text(message),
            row![horizontal_space(), button("关闭").on_press(on_close).style(button::danger)],
        ]
        .spacing(16),
    )
    .width(Length::Fixed(420.0))
    .padding(24)
    .style(container::rounded_box);

    // Backdrop swallows clicks so the page underneath stays inert
    opaque(center(opaque(dialog)).style(|_theme| container::Style {
        background: Some(Color { a: 0.5, ..Color::BLACK }.into()),
        ..container::Style::default()
    }))
}
