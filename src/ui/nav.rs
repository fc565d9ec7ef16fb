/// Auto-hiding navigation bar
///
/// Collapsed to a small handle at the top of the window until the pointer
/// enters it or the handle is touched. Every reveal/hide event overwrites
/// the previous one, so the later event always wins:
/// - pointer enter: reveal, no auto-hide
/// - pointer exit: hide now
/// - touch on the handle: reveal, hide after `auto_hide`
/// - tick past the deadline: hide
///
/// The bar does not know the current location and highlights nothing.

use iced::widget::{button, container, mouse_area, row, Space};
use iced::{Element, Length};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::router::Route;

#[derive(Debug, Clone)]
pub enum NavMessage {
    PointerEntered,
    PointerExited,
    Touched,
    Navigate(Route),
}

#[derive(Debug, Clone)]
pub struct NavBar {
    revealed: bool,
    hide_at: Option<Instant>,
    auto_hide: Duration,
}

impl NavBar {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            revealed: false,
            hide_at: None,
            auto_hide,
        }
    }

    /// Apply an event; returns the route to navigate to, if any
    pub fn update(&mut self, message: NavMessage, now: Instant) -> Option<Route> {
        match message {
            NavMessage::PointerEntered => {
                self.revealed = true;
                self.hide_at = None;
            }
            NavMessage::PointerExited => {
                self.revealed = false;
                self.hide_at = None;
            }
            NavMessage::Touched => {
                self.revealed = true;
                self.hide_at = Some(now + self.auto_hide);
            }
            NavMessage::Navigate(route) => {
                debug!("Nav item activated: {}", route.path());
                return Some(route);
            }
        }
        None
    }

    /// Clock tick; hides the bar once the touch deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.hide_at {
            if now >= deadline {
                self.revealed = false;
                self.hide_at = None;
            }
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// True while an auto-hide is pending and ticks are needed
    pub fn needs_ticks(&self) -> bool {
        self.hide_at.is_some()
    }

    pub fn view(&self) -> Element<'_, NavMessage> {
        let content: Element<'_, NavMessage> = if self.is_revealed() {
            container(
                row![
                    nav_item("解题", Route::Solution),
                    nav_item("检查", Route::Check),
                ]
                .spacing(8),
            )
            .padding(8)
            .style(container::rounded_box)
            .into()
        } else {
            mouse_area(
                container(Space::new(Length::Fixed(160.0), Length::Fixed(8.0)))
                    .style(container::rounded_box),
            )
            .on_press(NavMessage::Touched)
            .into()
        };

        mouse_area(content)
            .on_enter(NavMessage::PointerEntered)
            .on_exit(NavMessage::PointerExited)
            .into()
    }
}

fn nav_item(label: &str, route: Route) -> Element<'_, NavMessage> {
    button(label)
        .on_press(NavMessage::Navigate(route))
        .padding([8, 16])
        .style(button::text)
        .into()
}
