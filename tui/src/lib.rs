//! Card rendering for data-provider tool invocations, using ratatui.

mod card;
mod display;
mod format;
mod theme;

pub use card::ProviderCard;
pub use display::{ProviderDisplay, provider_display};
pub use format::{format_timestamp, truncate_with_ellipsis};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame};
