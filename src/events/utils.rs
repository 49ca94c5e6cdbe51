use crate::state::CellRect;

/// Number of characters in `s`.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `ci`-th character, or `s.len()` past the end.
pub fn byte_index(s: &str, ci: usize) -> usize {
    s.char_indices().nth(ci).map_or(s.len(), |(i, _)| i)
}

/// Whether the cell `(mx, my)` lies inside `rect`.
pub const fn point_in_rect(mx: u16, my: u16, rect: Option<CellRect>) -> bool {
    match rect {
        Some((x, y, w, h)) => mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Character and byte offsets agree on multi-byte text
    ///
    /// - Input: "añb"
    /// - Output: 3 chars; char 2 starts at byte 3; past-end maps to len
    fn offsets_handle_multibyte() {
        assert_eq!(char_count("añb"), 3);
        assert_eq!(byte_index("añb", 2), 3);
        assert_eq!(byte_index("añb", 9), 4);
    }

    #[test]
    /// What: Hit test is inclusive of origin and exclusive of far edges
    ///
    /// - Input: Rect (2, 3, 4, 1)
    /// - Output: (2,3) and (5,3) inside; (6,3) and (2,4) outside; None never hits
    fn point_in_rect_edges() {
        let r = Some((2, 3, 4, 1));
        assert!(point_in_rect(2, 3, r));
        assert!(point_in_rect(5, 3, r));
        assert!(!point_in_rect(6, 3, r));
        assert!(!point_in_rect(2, 4, r));
        assert!(!point_in_rect(2, 3, None));
    }
}
