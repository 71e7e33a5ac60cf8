//! Configuration Constants

use crate::theme::Theme;

/// Reserved storage key holding the id allocator's high-water mark.
/// Never reported as a todo record.
pub const SEQUENCE_KEY: &str = "todo-cards:sequence";

/// `chrono` pattern for the creation timestamp shown on each card.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Theme applied before the user touches the toggle.
pub const DEFAULT_THEME: Theme = Theme::Light;
