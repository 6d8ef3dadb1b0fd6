//! Segmentation rules and the rule-file format.

use serde::Serialize;
use std::fmt;

/// Header line of an exported rule file.
pub const RULE_FILE_HEADER: &str = "[segment:auto_generated]";

/// A ranked filter matching URLs that contain `value` as a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentationRule {
    pub value: String,
    pub count: usize,
    /// 1-based position in the top list.
    pub rank: usize,
}

impl SegmentationRule {
    pub fn path_pattern(&self) -> String {
        path_pattern(&self.value)
    }
}

/// `path */<value>/*`
pub fn path_pattern(value: &str) -> String {
    format!("path */{value}/*")
}

/// Two-line rule block: `@<value>` then the path pattern.
pub fn rule_block(value: &str) -> String {
    format!("@{value}\n{}", path_pattern(value))
}

impl fmt::Display for SegmentationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rule_block(&self.value))
    }
}

/// Rule-file text: header, then one block per rule, blank-line separated.
pub fn render_rule_file(rules: &[SegmentationRule]) -> String {
    let mut blocks = Vec::with_capacity(rules.len() + 1);
    blocks.push(RULE_FILE_HEADER.to_string());
    blocks.extend(rules.iter().map(ToString::to_string));
    blocks.join("\n\n")
}
