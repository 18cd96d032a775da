//! Easypie - Easy Pie Chart shortcode rendering with layered chart defaults.
//!
//! This library provides the core functionality for easypie, including:
//! - The chart option schema and the TOML-backed options store
//! - Merging stored options with per-shortcode attributes
//! - Serializing the merged options for the jQuery chart library
//! - Rendering chart markup, page assets and the admin settings form
//! - Validating admin settings submissions
//!
//! # Example
//!
//! ```no_run
//! use easypie_cli::config::default_store_path;
//! use easypie_cli::plugin::PluginContext;
//! use easypie_cli::render::AssetQueue;
//!
//! let path = default_store_path("wp-easypiechart").unwrap();
//! let ctx = PluginContext::load(&path).unwrap();
//!
//! let mut assets = AssetQueue::new();
//! let body = ctx.render_content(r#"[easypiechart percent="54" label="Done"]"#, &mut assets);
//!
//! println!("{}{}", assets.render_tags(), body);
//! ```

pub mod config;
pub mod error;
pub mod escape;
pub mod logging;
pub mod plugin;
pub mod render;
pub mod serialize;
pub mod shortcode;
pub mod validate;

pub use error::{EasyPieError, Result};
pub use plugin::PluginContext;
