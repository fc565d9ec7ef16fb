use iced::keyboard::{self, key::Named};
use iced::widget::{container, stack};
use iced::{event, mouse, Element, Event, Length, Subscription, Task, Theme};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod router;
mod state;
mod ui;

use api::SolverClient;
use config::Settings;
use router::{Route, Router};
use state::data::{CheckResult, SolutionResult};
use ui::nav::{NavBar, NavMessage};
use ui::page::{Page, PageMessage};

/// Frame interval for the spinner and the nav auto-hide check
const TICK: Duration = Duration::from_millis(50);

/// The page shown for the current route
#[derive(Debug)]
enum ActivePage {
    Solution(Page<SolutionResult>),
    Check(Page<CheckResult>),
}

impl ActivePage {
    fn for_route(route: Route) -> Self {
        match route {
            Route::Solution => ActivePage::Solution(Page::new()),
            Route::Check => ActivePage::Check(Page::new()),
        }
    }

    fn is_loading(&self) -> bool {
        match self {
            ActivePage::Solution(page) => page.is_loading(),
            ActivePage::Check(page) => page.is_loading(),
        }
    }
}

/// Main application state
struct HomeworkHelper {
    client: SolverClient,
    router: Router,
    nav: NavBar,
    page: ActivePage,
    /// Incremented whenever the page is replaced; tags page messages so
    /// responses for a page that is gone are dropped
    page_id: u64,
    started: Instant,
    now: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    Nav(NavMessage),
    /// Back/forward signals from keyboard or mouse
    Back,
    Forward,
    Solution(u64, PageMessage<SolutionResult>),
    Check(u64, PageMessage<CheckResult>),
    Tick(Instant),
}

impl HomeworkHelper {
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let client = SolverClient::from_settings(&settings);
        let router = Router::default();
        let now = Instant::now();

        info!("🎓 Homework Helper ready, using server {}", client.base_url());

        (
            HomeworkHelper {
                client,
                page: ActivePage::for_route(router.route()),
                router,
                nav: NavBar::new(settings.nav_auto_hide()),
                page_id: 0,
                started: now,
                now,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Nav(message) => {
                if let Some(route) = self.nav.update(message, Instant::now()) {
                    let changed = self.router.navigate(route.path());
                    self.open(changed);
                }
                Task::none()
            }
            Message::Back => {
                let changed = self.router.back();
                self.open(changed);
                Task::none()
            }
            Message::Forward => {
                let changed = self.router.forward();
                self.open(changed);
                Task::none()
            }
            Message::Solution(id, message) => match &mut self.page {
                ActivePage::Solution(page) if id == self.page_id => page
                    .update(message, &self.client)
                    .map(move |message| Message::Solution(id, message)),
                _ => {
                    debug!("Dropping message for closed solution page {}", id);
                    Task::none()
                }
            },
            Message::Check(id, message) => match &mut self.page {
                ActivePage::Check(page) if id == self.page_id => page
                    .update(message, &self.client)
                    .map(move |message| Message::Check(id, message)),
                _ => {
                    debug!("Dropping message for closed check page {}", id);
                    Task::none()
                }
            },
            Message::Tick(now) => {
                self.now = now;
                self.nav.tick(now);
                Task::none()
            }
        }
    }

    /// Replace the page after the router reported a location change
    fn open(&mut self, route: Option<Route>) {
        let Some(route) = route else {
            return;
        };

        self.page_id += 1;
        self.page = ActivePage::for_route(route);
        info!("📄 Showing {:?} page for {}", route, self.router.location());
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let id = self.page_id;
        let rotation = self.spinner_rotation();

        let page = match &self.page {
            ActivePage::Solution(page) => page
                .view(rotation)
                .map(move |message| Message::Solution(id, message)),
            ActivePage::Check(page) => page
                .view(rotation)
                .map(move |message| Message::Check(id, message)),
        };

        let nav = container(self.nav.view().map(Message::Nav)).center_x(Length::Fill);

        stack![
            container(page)
                .padding([32, 24])
                .width(Length::Fill)
                .height(Length::Fill),
            nav,
        ]
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let history = event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(Named::ArrowLeft),
                modifiers,
                ..
            }) if modifiers.alt() => Some(Message::Back),
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(Named::ArrowRight),
                modifiers,
                ..
            }) if modifiers.alt() => Some(Message::Forward),
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Back)) => Some(Message::Back),
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Forward)) => Some(Message::Forward),
            _ => None,
        });

        if self.page.is_loading() || self.nav.needs_ticks() {
            Subscription::batch([history, iced::time::every(TICK).map(Message::Tick)])
        } else {
            history
        }
    }

    /// One turn every 1.25 seconds
    fn spinner_rotation(&self) -> f32 {
        let elapsed = self.now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed * 0.8).fract() * TAU
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    // RUST_LOG wins; otherwise our own logs at info and dependencies at warn
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,homework_helper=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::load();

    iced::application("作业助手", HomeworkHelper::update, HomeworkHelper::view)
        .subscription(HomeworkHelper::subscription)
        .theme(HomeworkHelper::theme)
        .centered()
        .run_with(move || HomeworkHelper::new(settings))
}
