//! Deterministic node explanations
//!
//! A pure string-template explainer keyed on tag name and attributes. It
//! stands in for a remote model: same node in, same text out, no I/O. The
//! suggestion list reuses the same heuristics the analyzers flag, phrased as
//! actionable edits.

use crate::dom::DomNode;
use serde::{Deserialize, Serialize};

/// Explanation and improvement suggestions for one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Explain a node: what it is, and what could be improved
pub fn explain_node(node: &DomNode) -> Explanation {
    Explanation {
        explanation: describe(node),
        suggestions: suggest(node),
    }
}

fn describe(node: &DomNode) -> String {
    let tag = match node.tag_name.as_deref() {
        Some(tag) => tag,
        None => return describe_non_element(node),
    };

    let mut text = format!("This is a <{tag}> element");

    if let Some(id) = node.dom_id() {
        text.push_str(&format!(" with ID \"{id}\""));
    }

    if let Some(class) = node.attribute("class") {
        let classes: Vec<&str> = class.split_whitespace().collect();
        match classes.as_slice() {
            [] => {}
            [single] => text.push_str(&format!(" with class \"{single}\"")),
            many => text.push_str(&format!(" with classes \"{}\"", many.join("\", \""))),
        }
    }

    let child_count = node.children.len();
    if child_count > 0 {
        let plural = if child_count == 1 { "" } else { "s" };
        text.push_str(&format!(". It contains {child_count} child node{plural}."));
    } else {
        text.push('.');
    }

    text.push_str("\n\n");
    text.push_str(&describe_purpose(node, tag));
    text
}

fn describe_non_element(node: &DomNode) -> String {
    match &node.text_content {
        Some(text) if !text.is_empty() => format!("This node carries the text \"{text}\"."),
        _ => "This is a non-element node with no text content.".to_string(),
    }
}

fn describe_purpose(node: &DomNode, tag: &str) -> String {
    let class = node.attribute("class").unwrap_or("");
    let mut text = String::new();

    match tag {
        "div" => {
            text.push_str("This <div> element is used as a generic container for content. ");
            if class.contains("container") || class.contains("wrapper") {
                text.push_str("It appears to be a main wrapper or container for other elements. ");
            }
            if !node.has_attribute("role") && node.children.len() > 3 {
                text.push_str("Consider adding a semantic role attribute for better accessibility. ");
            }
        }
        "button" => {
            text.push_str("This button element is used for user interaction. ");
            if !node.has_attribute("type") {
                text.push_str("It doesn't have a type attribute specified. ");
            }
            if !node.has_attribute("aria-label") && node.text_content.is_none() {
                text.push_str("Consider adding an aria-label for better accessibility. ");
            }
        }
        "a" => {
            text.push_str("This is a link element that navigates to ");
            match node.attribute("href") {
                Some(href) => text.push_str(&format!("\"{href}\". ")),
                None => text.push_str("an unspecified destination (missing href attribute). "),
            }
            if !node.has_attribute("rel")
                && node.attribute("href").is_some_and(|h| h.starts_with("http"))
            {
                text.push_str("Consider adding rel=\"noopener\" for external links. ");
            }
        }
        "img" => {
            text.push_str("This is an image element ");
            match node.attribute("alt") {
                Some(alt) => text.push_str(&format!("with alt text \"{alt}\". ")),
                None => {
                    text.push_str("missing alt text, which is important for accessibility. ")
                }
            }
        }
        "input" => {
            let input_type = node.attribute("type").unwrap_or("text");
            text.push_str(&format!("This is an input element of type \"{input_type}\". "));
            if node.dom_id().is_none() {
                text.push_str(
                    "It doesn't have an ID, which makes it harder to associate with a label. ",
                );
            }
        }
        "nav" => {
            text.push_str(
                "This is a navigation element that typically contains links to other pages. ",
            );
        }
        "header" => {
            text.push_str(
                "This is a header element that typically contains introductory content or navigation aids. ",
            );
        }
        "footer" => {
            text.push_str(
                "This is a footer element that typically contains information about the author, copyright, or related links. ",
            );
        }
        "section" => {
            text.push_str(
                "This is a section element that represents a standalone section of content. ",
            );
            if !node.has_attribute("aria-label") && !node.has_attribute("aria-labelledby") {
                text.push_str(
                    "Consider adding an aria-label or aria-labelledby attribute for better accessibility. ",
                );
            }
        }
        _ => {}
    }

    text
}

fn suggest(node: &DomNode) -> Vec<String> {
    let mut suggestions = Vec::new();
    let Some(tag) = node.tag_name.as_deref() else {
        return suggestions;
    };

    let hint = |attr: &str, needle: &str| {
        node.attribute(attr).is_some_and(|value| value.contains(needle))
    };

    if tag == "div" {
        if hint("class", "nav") || hint("id", "nav") {
            suggestions.push(
                "Replace <div> with <nav> for better semantics since this appears to be a navigation element."
                    .to_string(),
            );
        } else if hint("class", "header") || hint("id", "header") {
            suggestions.push("Replace <div> with <header> for better semantics.".to_string());
        } else if hint("class", "footer") || hint("id", "footer") {
            suggestions.push("Replace <div> with <footer> for better semantics.".to_string());
        } else if hint("class", "main") || hint("id", "main") {
            suggestions.push("Replace <div> with <main> for better semantics.".to_string());
        } else if hint("class", "section") || hint("id", "section") {
            suggestions.push("Replace <div> with <section> for better semantics.".to_string());
        } else if !node.has_attribute("role") && !node.children.is_empty() {
            suggestions
                .push("Add a role attribute to this <div> to improve accessibility.".to_string());
        }
    }

    if tag == "img" && !node.has_attribute("alt") {
        suggestions.push("Add alt text to this image for better accessibility.".to_string());
    }

    if tag == "button" && !node.has_attribute("type") {
        suggestions.push("Add a type attribute to this button (e.g., type=\"button\").".to_string());
    }

    if matches!(tag, "input" | "textarea" | "select")
        && !node.has_attribute("aria-label")
        && !node.has_attribute("aria-labelledby")
    {
        suggestions.push(
            "Add an aria-label or associate this form control with a <label> element.".to_string(),
        );
    }

    if tag == "a"
        && node.attribute("href").is_some_and(|h| h.starts_with("http"))
        && !node.has_attribute("rel")
    {
        suggestions.push(
            "Add rel=\"noopener noreferrer\" to this external link for security.".to_string(),
        );
    }

    suggestions
}
