//! HTML rendering for easypie.
//!
//! This module handles:
//! - Chart markup and its initialization script
//! - The admin settings form
//! - Stylesheet and script queueing for a page

pub mod assets;
pub mod chart;
pub mod settings;

pub use assets::{Asset, AssetQueue};
pub use chart::{enqueue_chart_assets, render_chart};
pub use settings::{render_field, render_settings_form};
