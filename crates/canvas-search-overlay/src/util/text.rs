/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack` at or after byte offset `from`.
///
/// Both sides are folded through `char::to_lowercase`, so matches land on
/// char boundaries of the original haystack even when folding expands a
/// character. Returns `None` for an empty needle.
pub fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let folded_needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if folded_needle.is_empty() {
        return None;
    }
    for (offset, _) in haystack[from..].char_indices() {
        let start = from + offset;
        if let Some(end) = match_at(haystack, start, &folded_needle) {
            return Some((start, end));
        }
    }
    None
}

/// End offset of a fold-equal match starting exactly at `start`, if any.
/// A match must cover whole haystack characters.
fn match_at(haystack: &str, start: usize, folded_needle: &[char]) -> Option<usize> {
    let mut expected = folded_needle.iter();
    let mut wanted = expected.next();
    for (offset, ch) in haystack[start..].char_indices() {
        for folded in ch.to_lowercase() {
            match wanted {
                Some(&w) if w == folded => wanted = expected.next(),
                _ => return None,
            }
        }
        if wanted.is_none() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_substring() {
        assert_eq!(find_ignore_case("hello world", "world", 0), Some((6, 11)));
    }

    #[test]
    fn folds_case_on_both_sides() {
        assert_eq!(find_ignore_case("Hello World", "wORLD", 0), Some((6, 11)));
        assert_eq!(find_ignore_case("ALPHA", "alpha", 0), Some((0, 5)));
    }

    #[test]
    fn respects_start_offset() {
        assert_eq!(find_ignore_case("aba", "a", 1), Some((2, 3)));
    }

    #[test]
    fn empty_needle_never_matches() {
        assert_eq!(find_ignore_case("abc", "", 0), None);
    }

    #[test]
    fn no_match_past_end() {
        assert_eq!(find_ignore_case("abc", "abcd", 0), None);
    }

    #[test]
    fn multibyte_haystack_offsets_are_byte_accurate() {
        let hay = "héllo Héllo";
        let (start, end) = find_ignore_case(hay, "héllo", 7).unwrap();
        assert_eq!(&hay[start..end], "Héllo");
    }
}
