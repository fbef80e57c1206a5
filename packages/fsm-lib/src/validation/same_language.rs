use itertools::Itertools;

use crate::automaton::{Automaton, accepts};

/// All words over `alphabet` of length 0 up to and including `max_len`,
/// shortest first.
pub fn words(alphabet: &[char], max_len: usize) -> impl Iterator<Item = String> + '_ {
    std::iter::once(String::new()).chain((1..=max_len).flat_map(move |len| {
        std::iter::repeat_n(alphabet.iter().copied(), len)
            .multi_cartesian_product()
            .map(|chars| chars.into_iter().collect())
    }))
}

/// True iff `a` and `b` agree on every word over `alphabet` up to `max_len`
/// symbols. Exhaustive, so keep the bound small.
pub fn same_language(
    a: &mut impl Automaton,
    b: &mut impl Automaton,
    alphabet: &[char],
    max_len: usize,
) -> bool {
    words(alphabet, max_len).all(|word| {
        a.reset();
        b.reset();
        accepts(a, &word) == accepts(b, &word)
    })
}

/// Like [`same_language`], but panics with the first disagreeing word.
pub fn assert_same_language(
    a: &mut impl Automaton,
    b: &mut impl Automaton,
    alphabet: &[char],
    max_len: usize,
) {
    for word in words(alphabet, max_len) {
        a.reset();
        b.reset();

        let accepted_a = accepts(a, &word);
        let accepted_b = accepts(b, &word);

        assert_eq!(
            accepted_a, accepted_b,
            "automatons disagree on input {word:?}"
        );
    }
}
