//! Shortcode handling for easypie.
//!
//! This module handles:
//! - Finding `[easypiechart ...]` directives in content
//! - Parsing their attributes into a typed `ChartAttributes`

pub mod attributes;
pub mod parser;

pub use attributes::{ChartAttributes, format_number};
pub use parser::{parse_attributes, replace_shortcodes};

/// Shortcode tag that renders a chart: `[easypiechart percent="54"]`.
pub const SHORTCODE_TAG: &str = "easypiechart";
