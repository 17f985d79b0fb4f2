//! UI module - TUI rendering components.
//!
//! - `layout.rs`: Header, hero banner, form and footer
//! - `form_panel.rs`: The five fields and the submit button
//! - `widgets/`: Modal overlays

mod form_panel;
mod layout;

pub mod widgets;

pub use layout::render;
