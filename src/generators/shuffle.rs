use rand::Rng;

/// Shuffles `items` in place with a backward Fisher-Yates pass.
///
/// For each position `i` from the last down to 1, an index `j` is drawn uniformly from
/// `0..=i` and the two elements are swapped, so every permutation is equally likely.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
