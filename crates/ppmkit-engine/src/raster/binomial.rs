/// `C(n, k)`: zero when `k > n`, otherwise row `n`, entry `k` of Pascal's
/// triangle.
///
/// Built bottom-up from `C(n, 0) = C(n, n) = 1` and
/// `C(n, k) = C(n-1, k-1) + C(n-1, k)`, keeping a single row of length
/// `min(k, n-k) + 1`. Saturates at `u64::MAX` for very large `n`.
pub fn binomial_coefficient(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as usize;
    let mut row = vec![0u64; k + 1];
    row[0] = 1;
    for i in 1..=n as usize {
        for j in (1..=i.min(k)).rev() {
            row[j] = row[j].saturating_add(row[j - 1]);
        }
    }
    row[k]
}

/// Row `n` of Pascal's triangle: `[C(n,0), C(n,1), ..., C(n,n)]`.
///
/// Entries saturate at `u64::MAX` from `n = 68` on.
pub fn binomial_row(n: u32) -> Vec<u64> {
    let n = n as usize;
    let mut row = vec![0u64; n + 1];
    row[0] = 1;
    for i in 1..=n {
        for j in (1..=i).rev() {
            row[j] = row[j].saturating_add(row[j - 1]);
        }
    }
    row
}

/// Row `n` of Pascal's triangle in floating point.
///
/// Used as Bernstein weights. Unlike [`binomial_row`] it does not saturate, so
/// curves with more than 67 control points keep their middle weights.
pub fn binomial_row_f64(n: u32) -> Vec<f64> {
    let n = n as usize;
    let mut row = vec![0.0f64; n + 1];
    row[0] = 1.0;
    for i in 1..=n {
        for j in (1..=i).rev() {
            row[j] += row[j - 1];
        }
    }
    row
}
