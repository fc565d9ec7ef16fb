/// Collapsible panel widget
///
/// The body is always part of the widget tree. A closed panel clips it to
/// zero height instead of removing it, so widget state inside survives
/// toggling.

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

pub fn collapse<'a, Message: Clone + 'a>(
    title: String,
    open: bool,
    content: impl Into<Element<'a, Message>>,
    on_toggle: Message,
) -> Element<'a, Message> {
    let arrow = if open { "▲" } else { "▼" };

    let header = button(
        row![text(title).size(16), horizontal_space(), text(arrow).size(12)]
            .align_y(Alignment::Center),
    )
    .on_press(on_toggle)
    .width(Length::Fill)
    .padding(12)
    .style(button::text);

    let body = container(container(content).padding(12).width(Length::Fill))
        .width(Length::Fill)
        .height(if open { Length::Shrink } else { Length::Fixed(0.0) })
        .clip(true);

    container(column![header, body])
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
