//! Tag containment filter.

use foodfacts_model::Node;

/// Returns true when any value of `node` contains `target` as a substring.
///
/// The test is a plain, case-sensitive substring match, so a delimited tag
/// string (`"en:switzerland,en:france"`) and a tag list behave the same way.
/// A missing field never matches.
///
/// # Examples
///
/// ```
/// use foodfacts_model::Node;
/// use foodfacts_normalize::matches_tag;
///
/// assert!(matches_tag(&Node::scalar("en:switzerland,en:france"), "en:switzerland"));
/// assert!(!matches_tag(&Node::Missing, "en:switzerland"));
/// ```
pub fn matches_tag(node: &Node, target: &str) -> bool {
    node.values().iter().any(|value| value.contains(target))
}
