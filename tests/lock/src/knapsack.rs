//! Exact length-filling oracle.
//!
//! Placing `n` units of lengths `l_i` with a gap `g` between neighbours
//! takes `sum(l_i) + (n - 1) g`, so a sequence fits a target `T` exactly
//! when `sum(l_i + g) <= T + g`. That is a 0/1 knapsack over the effective
//! lengths `l_i + g`, with each template repeated as often as it could fit.

/// Longest total length (gaps included) achievable within `target`.
///
/// Lengths are discretised to `resolution`; inputs that are multiples of it
/// are solved exactly.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn best_fill(lengths: &[f64], gap: f64, target: f64, resolution: f64) -> f64 {
    let to_steps = |x: f64| (x / resolution).round() as usize;
    let capacity = ((target + gap) / resolution + 1e-9).floor() as usize;

    let mut items = Vec::new();
    for &length in lengths {
        let weight = to_steps(length + gap);
        if weight == 0 || weight > capacity {
            continue;
        }
        items.extend(std::iter::repeat_n(weight, capacity / weight));
    }

    let mut reachable = vec![false; capacity + 1];
    reachable[0] = true;
    for weight in items {
        for total in (weight..=capacity).rev() {
            if reachable[total - weight] {
                reachable[total] = true;
            }
        }
    }

    let best = (1..=capacity).rev().find(|&t| reachable[t]).unwrap_or(0);
    if best == 0 {
        0.0
    } else {
        best as f64 * resolution - gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_is_found() {
        let best = best_fill(&[2.9, 4.9], 0.1, 8.9, 0.1);
        // 2.9 + 0.1 + 2.9 + 0.1 + 2.9 = 8.9
        assert!((best - 8.9).abs() < 1e-9);
    }

    #[test]
    fn nothing_fits() {
        assert!(best_fill(&[5.0], 0.2, 4.0, 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn mixes_templates() {
        // 5.0 + 0.2 + 7.2 = 12.4, the best fill below 13.0.
        let best = best_fill(&[5.0, 7.2], 0.2, 13.0, 0.1);
        assert!((best - 12.4).abs() < 1e-9);
    }
}
