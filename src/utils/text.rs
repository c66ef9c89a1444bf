use std::cmp::Ordering;

/**
Compare two strings lexicographically ignoring letter case.

Both operands are folded to Unicode lowercase one character at a time, so no intermediate
strings are allocated. Strings that differ only by case compare equal.
*/
pub(crate) fn caseless_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b)
}
