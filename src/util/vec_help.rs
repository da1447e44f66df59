/// Arithmetic mean, `NaN` for an empty slice.
pub(crate) fn mean(v: &[f64]) -> f64 {
    v.iter().sum::<f64>() / v.len() as f64
}

/// Mean of the squares, `NaN` for an empty slice.
pub(crate) fn mean_sq(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>() / v.len() as f64
}

/// Population variance `<d^2> - <d>^2` with `d` measured from the first element.
///
/// A constant slice gives exactly zero. `NaN` for an empty slice.
pub(crate) fn shifted_variance(v: &[f64]) -> f64 {
    match v.first() {
        None => f64::NAN,
        Some(&x0) => {
            let n = v.len() as f64;
            let (sum, sum_sq) = v.iter().fold((0.0, 0.0), |(acc, acc_sq), x| {
                let d = x - x0;
                (acc + d, acc_sq + d * d)
            });
            let d = sum / n;
            sum_sq / n - d * d
        }
    }
}

/// Copy of `v` with element `i` removed, keeping order.
pub(crate) fn without_index(v: &[f64], i: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(v.len().saturating_sub(1));
    out.extend_from_slice(&v[..i]);
    out.extend_from_slice(&v[i + 1..]);
    out
}
