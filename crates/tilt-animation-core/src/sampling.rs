//! Channel sampling: clamped piecewise-linear evaluation.
//!
//! Model:
//! - Keys are ordered by time; times are seconds within the animation cycle.
//! - Queries before the first key or after the last key clamp to the
//!   boundary value (the scene holds its first/last pose, no extrapolation).
//! - Between two adjacent keys the value is the linear blend of the pair.
//! - Duplicate-time pairs ("snap" transitions in the authored data) resolve
//!   to the later-indexed value instead of dividing by zero.

use crate::channel::Keyframe;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, f: f32) -> f32 {
    a + (b - a) * f
}

/// Find the segment [i, i+1] containing query time `t`, returning
/// (i, i+1, fraction) with fraction in [0,1] between the two key times.
/// Edge cases:
/// - If `t` < the first key's time, returns (0, 0, 0.0).
/// - If `t` >= the last key's time, returns (last, last, 0.0).
/// - Degenerate pairs (equal times) are never selected as a segment; a query
///   landing exactly on a doubled time resolves to the later-indexed key,
///   including when the doubled time opens the channel.
fn find_segment(keys: &[Keyframe], t: f32) -> (usize, usize, f32) {
    let n = keys.len();
    // Strictly-before only: a query landing on the first key's time must
    // still scan, so a doubled opening time resolves to the later key.
    if n == 1 || t < keys[0].time {
        return (0, 0, 0.0);
    }
    if t >= keys[n - 1].time {
        return (n - 1, n - 1, 0.0);
    }
    // Linear scan; channels hold tens of keys, so no need for binary search.
    for i in 0..(n - 1) {
        let t0 = keys[i].time;
        let t1 = keys[i + 1].time;
        if t >= t0 && t < t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 1.0 };
            return (i, i + 1, f.clamp(0.0, 1.0));
        }
    }
    (n - 1, n - 1, 0.0)
}

/// Sample an ordered key slice at query time `t`. Returns `None` for an
/// empty slice; callers decide whether that is fatal (`Channel::evaluate`
/// turns it into an error).
pub fn sample_keys(keys: &[Keyframe], t: f32) -> Option<f32> {
    match keys.len() {
        0 => None,
        1 => Some(keys[0].value),
        _ => {
            let (i0, i1, f) = find_segment(keys, t);
            if i0 == i1 {
                return Some(keys[i0].value);
            }
            Some(lerp(keys[i0].value, keys[i1].value, f))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pairs: &[(f32, f32)]) -> Vec<Keyframe> {
        pairs
            .iter()
            .map(|&(time, value)| Keyframe { time, value })
            .collect()
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(sample_keys(&[], 1.0), None);
    }

    #[test]
    fn segment_selection() {
        let ks = keys(&[(0.0, 0.0), (1.0, 1.0), (3.0, 5.0)]);
        assert_eq!(find_segment(&ks, 0.5), (0, 1, 0.5));
        assert_eq!(find_segment(&ks, 2.0), (1, 2, 0.5));
        assert_eq!(find_segment(&ks, -4.0), (0, 0, 0.0));
        assert_eq!(find_segment(&ks, 3.0), (2, 2, 0.0));
    }

    #[test]
    fn degenerate_pair_takes_later_value() {
        // Internal duplicate: query lands exactly on the doubled time.
        let ks = keys(&[(0.0, 0.0), (5.0, 1.0), (5.0, 2.0), (10.0, 3.0)]);
        assert_eq!(sample_keys(&ks, 5.0), Some(2.0));
        let got = sample_keys(&ks, 5.0).unwrap();
        assert!(got.is_finite());
    }

    #[test]
    fn leading_degenerate_pair_takes_later_value() {
        // The doubled time opens the channel; the later key still wins.
        let ks = keys(&[(7.0, 1.0), (7.0, 2.0), (10.0, 3.0)]);
        assert_eq!(sample_keys(&ks, 7.0), Some(2.0));
        // Queries before the doubled time still clamp to the first key.
        assert_eq!(sample_keys(&ks, 6.0), Some(1.0));
    }
}
