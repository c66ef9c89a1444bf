/**
Rebuild a vector in the order given by a permutation of its indices.

Position `target` of the returned vector holds the element that was at `permutation[target]` in
the input.

# Panics

Panics if the permutation's length does not match the vector's length or if the permutation
repeats an index. Callers derive permutations by sorting `0..items.len()` so both properties
hold by construction.
*/
pub(crate) fn apply_permutation<T>(items: Vec<T>, permutation: &[usize]) -> Vec<T> {
    assert_eq!(
        items.len(),
        permutation.len(),
        "a permutation must cover every element exactly once"
    );

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();

    permutation
        .iter()
        .map(|&source| {
            slots[source]
                .take()
                .expect("a permutation must not repeat an index")
        })
        .collect()
}
