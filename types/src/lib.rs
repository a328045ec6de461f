//! Domain types for the data-provider tool card.
//!
//! This crate contains pure domain types and the provider classifier with
//! no IO, no async, and no rendering dependencies. Everything here is
//! computed fresh per render pass.

mod content;
mod provider;
mod ui;
mod view;

pub use content::ToolContent;
pub use provider::{DetectedProvider, ProviderKey, UnknownProviderError, classify};
pub use ui::UiOptions;
pub use view::ToolInvocationView;
