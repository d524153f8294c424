/// Computes the weighted arithmetic mean of `(value, weight)` pairs.
/// Returns 0.0 when the weights sum to zero, including for empty input.
pub fn weighted_mean(pairs: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (weighted_total, weight_sum) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(total, sum), (value, weight)| {
            (total + value * weight, sum + weight)
        });

    if weight_sum == 0.0 {
        0.0
    } else {
        weighted_total / weight_sum
    }
}
