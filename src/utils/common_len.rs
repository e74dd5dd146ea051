use std::ops::Range;

/// Counts how many items, walking forward from the start of both ranges, are
/// pairwise equal.
///
/// ```not_rust
/// old: [a, b, c, d]  0..4
/// new: [a, b, x]     0..3
/// ```
/// > results in 2
pub fn common_prefix_len<T>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
) -> usize
where
    T: PartialEq,
{
    old[old_range]
        .iter()
        .zip(&new[new_range])
        .take_while(|(old, new)| old == new)
        .count()
}

/// Counts how many items, walking backward from the end of both ranges, are
/// pairwise equal.
pub fn common_suffix_len<T>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
) -> usize
where
    T: PartialEq,
{
    old[old_range]
        .iter()
        .rev()
        .zip(new[new_range].iter().rev())
        .take_while(|(old, new)| old == new)
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(b"", 0..0, b"", 0..0), 0);
        assert_eq!(common_prefix_len(b"foobarbaz", 0..9, b"foobarblah", 0..10), 7);
        assert_eq!(common_prefix_len(b"foobarbaz", 0..9, b"blablabla", 0..9), 0);
        assert_eq!(common_prefix_len(b"foobarbaz", 3..9, b"foobarblah", 3..10), 4);
        assert_eq!(common_prefix_len(b"abc", 0..2, b"abc", 0..3), 2);
    }

    #[test]
    fn test_common_suffix_len() {
        assert_eq!(common_suffix_len(b"", 0..0, b"", 0..0), 0);
        assert_eq!(common_suffix_len(b"1234", 0..4, b"X0001234", 0..8), 4);
        assert_eq!(common_suffix_len(b"1234", 0..4, b"Xxxx", 0..4), 0);
        assert_eq!(common_suffix_len(b"1234", 2..4, b"01234", 2..5), 2);
        assert_eq!(common_suffix_len(b"xab", 1..3, b"yab", 0..3), 2);
    }
}
