/// Weighted median of ascending `positions` (Gansner et al., "A Technique for Drawing
/// Directed Graphs").
///
/// Odd counts take the middle value and two values average. Larger even counts lean towards
/// the side where neighbours are packed more tightly.
pub fn weighted_median(positions: &[f64]) -> Option<f64> {
    let len = positions.len();
    let m = len / 2;
    match len {
        0 => None,
        _ if len % 2 == 1 => Some(positions[m]),
        2 => Some((positions[0] + positions[1]) / 2.0),
        _ => {
            let left = positions[m - 1] - positions[0];
            let right = positions[len - 1] - positions[m];
            if left + right == 0.0 {
                return Some((positions[m - 1] + positions[m]) / 2.0);
            }
            Some((positions[m - 1] * right + positions[m] * left) / (left + right))
        }
    }
}
