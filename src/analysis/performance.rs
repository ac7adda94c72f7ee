//! Performance heuristics
//!
//! Pure attribute inspection; every condition is a boolean flag, not a
//! score. Computed-style conditions from the original runtime are read off
//! the inline style attribute here, which is all a static snapshot can see.

use crate::analysis::PerformanceFlags;
use crate::dom::DomNode;
use crate::dom::node::style_declarations;

/// Nesting depth beyond which layout work tends to degrade
const DEEP_NESTING_THRESHOLD: usize = 15;

/// Inline style length considered heavy
const HEAVY_STYLE_LENGTH: usize = 200;

/// Inline style declaration count considered heavy
const HEAVY_STYLE_DECLARATIONS: usize = 10;

/// Cumulative data-* payload length considered large
const LARGE_DATASET_LENGTH: usize = 1000;

/// Style properties that force extra compositing work
const COSTLY_PROPERTIES: [&str; 3] = ["box-shadow", "text-shadow", "filter"];

/// Compute the performance flags for one element node
pub fn flags(node: &DomNode) -> PerformanceFlags {
    let mut flags = PerformanceFlags::default();

    if node.depth > DEEP_NESTING_THRESHOLD {
        flags.deep_nesting = true;
    }

    if let Some(style) = node.attribute("style") {
        let decls = style_declarations(style);

        if style.len() > HEAVY_STYLE_LENGTH || decls.len() > HEAVY_STYLE_DECLARATIONS {
            flags.heavy_inline_styles = true;
        }

        flags.costly_styles = decls.iter().any(|(prop, value)| {
            if COSTLY_PROPERTIES.contains(&prop.as_str()) {
                return value != "none";
            }
            match prop.as_str() {
                "opacity" => value != "1",
                "transform" => value != "none",
                _ => false,
            }
        });
    }

    let data_size: usize = node
        .attributes
        .iter()
        .filter(|(name, _)| name.starts_with("data-"))
        .map(|(_, value)| value.len())
        .sum();
    if data_size > LARGE_DATASET_LENGTH {
        flags.large_dataset = true;
    }

    flags
}
