//! Presentation layer.
//!
//! ```text
//! Screen state → compute_viewmodel → ScreenViewModel → render → text
//! ```
//!
//! - [`descriptors`]: Colors, icons and labels for every status and category
//! - [`viewmodel`]: Display-ready snapshot types
//! - [`theme`]: TOML color schemes and ANSI escape helpers
//! - [`renderer`]: Entry point turning a view model into text
//! - [`components`]: Per-section renderers
//! - [`helpers`]: Output buffer, match highlighting, truncation

pub mod components;
pub mod descriptors;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use descriptors::{Describe, DisplayDescriptor};
pub use renderer::{render, render_screen, RenderOptions, DEFAULT_WIDTH};
pub use theme::{Theme, DEFAULT_THEME};
pub use viewmodel::{
    AlertBanner, Badge, ChipInfo, DisplayRow, EmptyState, FooterInfo, HeaderInfo, ScreenViewModel,
    SearchBarInfo, StatCard,
};
