/// Division that never fails: a zero denominator yields `0.0` instead of
/// `NaN` or infinity, so a degenerate table still produces a full metric set.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}
