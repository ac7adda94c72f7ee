use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};

/// User-facing settings, persisted by the embedding layer as a key-value
/// blob. Every field has a default so partially stored settings deserialize
/// cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub auto_expand_depth: usize,
    pub show_attributes: bool,
    pub show_node_values: bool,
    pub live_update_mode: bool,
    pub highlight_on_hover: bool,
    pub max_nodes_before_virtualization: usize,
    pub default_export_format: ExportFormat,
    pub autosave_snapshots: bool,
    pub snapshot_interval_seconds: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            auto_expand_depth: 2,
            show_attributes: true,
            show_node_values: true,
            live_update_mode: false,
            highlight_on_hover: true,
            max_nodes_before_virtualization: 1000,
            default_export_format: ExportFormat::Json,
            autosave_snapshots: false,
            snapshot_interval_seconds: 60,
        }
    }
}
