/// User interface module
///
/// Widgets and screens built on iced:
/// - Collapsible panel (collapse.rs)
/// - Error modal overlay (error_modal.rs)
/// - Loading spinner drawn on a canvas (spinner.rs)
/// - Auto-hiding navigation bar (nav.rs)
/// - Generic upload/result page (page.rs) and its Solution/Check renderings (solution.rs, check.rs)

pub mod check;
pub mod collapse;
pub mod error_modal;
pub mod nav;
pub mod page;
pub mod solution;
pub mod spinner;

use iced::Color;

pub const RED: Color = Color::from_rgb(0.86, 0.15, 0.15);
pub const YELLOW: Color = Color::from_rgb(0.79, 0.54, 0.02);
pub const GREEN: Color = Color::from_rgb(0.09, 0.64, 0.29);
pub const MUTED: Color = Color::from_rgb(0.6, 0.6, 0.63);
