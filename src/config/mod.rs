//! Chart configuration for easypie.
//!
//! This module handles:
//! - The field schema and plugin identity
//! - The TOML-backed options store
//! - Merging stored options with per-shortcode overrides

pub mod merge;
pub mod schema;
pub mod store;

pub use merge::{MERGE_DENYLIST, OverrideRecord, ResolvedConfig, merge_config};
pub use schema::{FieldSpec, InputType, PluginInfo, Schema, Validator};
pub use store::{
	OptionValue, OptionsRecord, default_store_path, load_options, parse_options_str, save_options,
};
