//! Structural path and selector builders
//!
//! The snapshot tree has no parent pointers, so all three identifiers are
//! built top-down while the extractor walks: the ordinal node path, the
//! structural XPath and the CSS selector. XPath and CSS selectors are
//! best-effort debugging aids; pathological markup (duplicate ids, repeated
//! identical structure) can produce selectors matching more than one
//! element, and no dedup fallback is attempted.

/// Ordinal path of the extraction root
pub const ROOT_PATH: &str = "/0";

/// Ordinal path of the child at `index` under `parent_path`
pub fn child_path(parent_path: &str, index: usize) -> String {
    format!("{parent_path}/{index}")
}

/// Fixed sentinel XPath for the extraction root
pub fn root_xpath(tag: &str) -> String {
    format!("/{tag}")
}

/// XPath of a child element: `parent/tag[n]` with `n` the 1-based position
/// among same-tag element siblings. `body` keeps its conventional index-free
/// sentinel segment.
pub fn child_xpath(parent_xpath: &str, tag: &str, position: usize) -> String {
    if tag == "body" {
        format!("{parent_xpath}/body")
    } else {
        format!("{parent_xpath}/{tag}[{position}]")
    }
}

/// CSS selector for an element.
///
/// Prefers `tag#id` and short-circuits (ids are assumed page-unique, not
/// verified); otherwise joins all classes onto the tag and prepends the
/// parent selector with a `>` combinator, stopping short of `body`.
pub fn css_selector(
    tag: &str,
    id: Option<&str>,
    class: Option<&str>,
    parent: Option<(&str, &str)>,
) -> String {
    if tag == "body" {
        return "body".to_string();
    }

    if let Some(id) = id.filter(|id| !id.is_empty()) {
        return format!("{tag}#{id}");
    }

    let mut selector = tag.to_string();
    if let Some(class) = class {
        for name in class.split_whitespace() {
            selector.push('.');
            selector.push_str(name);
        }
    }

    match parent {
        Some((parent_selector, parent_tag)) if parent_tag != "body" => {
            format!("{parent_selector} > {selector}")
        }
        _ => selector,
    }
}
