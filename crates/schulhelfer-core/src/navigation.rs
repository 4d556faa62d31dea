//! Event List Keyboard Navigation
//!
//! Roving focus: arrows wrap around, Home/End jump to the ends.

/// Index of the card that should receive focus after `key`,
/// or `None` when the key is not a navigation key.
pub fn next_focus_index(key: &str, current: usize, len: usize) -> Option<usize> {
    if len == 0 || current >= len {
        return None;
    }
    match key {
        "ArrowDown" | "ArrowRight" => Some((current + 1) % len),
        "ArrowUp" | "ArrowLeft" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

/// Enter and Space select the focused card
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_wrap() {
        assert_eq!(next_focus_index("ArrowDown", 2, 3), Some(0));
        assert_eq!(next_focus_index("ArrowRight", 0, 3), Some(1));
        assert_eq!(next_focus_index("ArrowUp", 0, 3), Some(2));
        assert_eq!(next_focus_index("ArrowLeft", 2, 3), Some(1));
    }

    #[test]
    fn test_home_end() {
        assert_eq!(next_focus_index("Home", 2, 5), Some(0));
        assert_eq!(next_focus_index("End", 0, 5), Some(4));
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(next_focus_index("Tab", 0, 3), None);
        assert_eq!(next_focus_index("ArrowDown", 0, 0), None);
        assert_eq!(next_focus_index("ArrowDown", 5, 3), None);
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("a"));
    }
}
