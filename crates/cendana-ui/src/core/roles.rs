//! Role gating for privileged action elements.
//!
//! Action buttons and form controls carry a space-separated list of roles
//! that may use them; an element stays visible when the signed-in user holds
//! at least one of them.

/// Whether a user holding `held` may see an element requiring `required`.
///
/// `required` is the raw attribute value (space-separated role names). An
/// empty attribute grants nobody.
#[must_use]
pub fn allowed(required: &str, held: &[String]) -> bool {
    required
        .split_whitespace()
        .any(|role| held.iter().any(|mine| mine == role))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn any_overlap_keeps_the_element() {
        assert!(allowed("admin supervisor", &roles(&["supervisor"])));
        assert!(allowed("admin", &roles(&["admin", "viewer"])));
    }

    #[test]
    fn empty_intersection_removes_the_element() {
        assert!(!allowed("admin supervisor", &roles(&["viewer"])));
        assert!(!allowed("admin", &[]));
    }

    #[test]
    fn blank_attribute_grants_nobody() {
        assert!(!allowed("", &roles(&["admin"])));
        assert!(!allowed("   ", &roles(&["admin"])));
    }
}
