use rand::Rng;

/// Ascending rank sequence `0..n`; the best applicant holds `n - 1`.
pub fn ranks(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// In-place Fisher-Yates shuffle: every ordering of `values` is equally likely.
#[inline]
pub fn shuffle<T, R: Rng + ?Sized>(values: &mut [T], rng: &mut R) {
    let n = values.len();
    if n == 0 {
        return;
    }
    for i in 0..n - 1 {
        let j = rng.gen_range(i..n);
        values.swap(i, j);
    }
}
