//! Highlight movement inside an open suggestion list.

/// `ArrowDown`: next item, wrapping to the top. Nothing highlighted moves to the first item.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(i) if i < len => Some((i + 1) % len),
        _ => Some(0),
    }
}

/// `ArrowUp`: previous item, wrapping to the bottom. Nothing highlighted moves to the last item,
/// not the one before it, so the first `ArrowUp` on a fresh list lands on its bottom entry.
pub fn prev_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(i) if i < len => Some((i + len - 1) % len),
        _ => Some(len - 1),
    }
}

/// `Enter`: the highlighted item, else the first one, else nothing.
pub fn enter_target(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        Some(i) if i < len => Some(i),
        _ if len > 0 => Some(0),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_wraps_around() {
        assert_eq!(next_index(None, 3), Some(0));
        assert_eq!(next_index(Some(0), 3), Some(1));
        assert_eq!(next_index(Some(2), 3), Some(0));
        assert_eq!(next_index(Some(0), 0), None);
    }

    #[test]
    fn up_wraps_around() {
        assert_eq!(prev_index(Some(0), 3), Some(2));
        assert_eq!(prev_index(Some(2), 3), Some(1));
        assert_eq!(prev_index(None, 3), Some(2));
        assert_eq!(prev_index(None, 0), None);
    }

    #[test]
    fn stale_highlight_past_the_end_restarts() {
        assert_eq!(next_index(Some(5), 2), Some(0));
        assert_eq!(prev_index(Some(5), 2), Some(1));
        assert_eq!(enter_target(Some(5), 2), Some(0));
    }

    #[test]
    fn enter_prefers_the_highlight() {
        assert_eq!(enter_target(Some(1), 3), Some(1));
        assert_eq!(enter_target(None, 3), Some(0));
        assert_eq!(enter_target(None, 0), None);
    }
}
