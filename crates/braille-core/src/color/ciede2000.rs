//! CIEDE2000 color difference (ΔE00)
//!
//! Implements the formula from CIE Technical Report 142-2001 with unit
//! parametric factors (`kL = kC = kH = 1`). Hue angles are carried in
//! degrees; conversion to radians happens only at the trigonometric calls.
//!
//! # References
//!
//! G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application 30(1), 2005.

use super::lab::Lab;

/// 25^7, the chroma pivot shared by `G` and `R_C`.
const POW25_7: f64 = 6_103_515_625.0;

/// Upper clamp for the returned distance.
const MAX_DELTA_E: f64 = 100.0;

#[inline]
fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

#[inline]
fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// `sqrt(c^7 / (c^7 + 25^7))`
#[inline]
fn chroma_weight(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

/// Hue angle of `(a, b)` in degrees, normalized to `0..360`.
#[inline]
fn hue_angle(b: f64, a: f64) -> f64 {
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Perceptual distance between two CIELAB colors, clamped to `0..=100`.
///
/// # Example
///
/// ```
/// use braille_core::{ciede2000, Lab};
///
/// let grey = Lab::new(50.0, 0.0, 0.0);
/// assert_eq!(ciede2000(grey, grey), 0.0);
///
/// let d = ciede2000(Lab::new(50.0, 2.6772, -79.7751), Lab::new(50.0, 0.0, -82.7485));
/// assert!((d - 2.0425).abs() < 1e-3);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    // 1-2: chroma-dependent a-axis stretch
    let c_bar = (lab1.chroma() + lab2.chroma()) / 2.0;
    let g = 0.5 * (1.0 - chroma_weight(c_bar));
    let a1_prime = lab1.a * (1.0 + g);
    let a2_prime = lab2.a * (1.0 + g);

    // 3
    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);
    let c_bar_prime = (c1_prime + c2_prime) / 2.0;

    // 4
    let h1_prime = hue_angle(lab1.b, a1_prime);
    let h2_prime = hue_angle(lab2.b, a2_prime);

    // 5: mean hue, taking the short way around the circle
    let h_sum = h1_prime + h2_prime;
    let h_bar_prime = if (h1_prime - h2_prime).abs() <= 180.0 {
        h_sum / 2.0
    } else if h_sum < 360.0 {
        (h_sum + 360.0) / 2.0
    } else {
        (h_sum - 360.0) / 2.0
    };

    // 6
    let t = 1.0 - 0.17 * cos_deg(h_bar_prime - 30.0)
        + 0.24 * cos_deg(2.0 * h_bar_prime)
        + 0.32 * cos_deg(3.0 * h_bar_prime + 6.0)
        - 0.20 * cos_deg(4.0 * h_bar_prime - 63.0);

    // 7
    let dh = h2_prime - h1_prime;
    let delta_h_prime = if dh.abs() <= 180.0 {
        dh
    } else if h2_prime <= h1_prime {
        dh + 360.0
    } else {
        dh - 360.0
    };

    // 8
    let delta_l_prime = lab2.l - lab1.l;
    let delta_c_prime = c2_prime - c1_prime;
    let delta_big_h_prime = 2.0 * (c1_prime * c2_prime).sqrt() * sin_deg(delta_h_prime / 2.0);

    // 9
    let l_bar_prime = (lab1.l + lab2.l) / 2.0;
    let l_offset_sq = (l_bar_prime - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_offset_sq) / (20.0 + l_offset_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_prime;
    let s_h = 1.0 + 0.015 * c_bar_prime * t;

    // 10: blue-region rotation term
    let delta_theta = 30.0 * (-((h_bar_prime - 275.0) / 25.0).powi(2)).exp();
    let r_c = 2.0 * chroma_weight(c_bar_prime);
    let r_t = -r_c * sin_deg(2.0 * delta_theta);

    // 11
    let term_l = delta_l_prime / s_l;
    let term_c = delta_c_prime / s_c;
    let term_h = delta_big_h_prime / s_h;
    let delta_e = (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h)
        .max(0.0)
        .sqrt();

    delta_e.clamp(0.0, MAX_DELTA_E)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    /// Sharma et al. supplementary test data: (L1, a1, b1, L2, a2, b2, ΔE00).
    const SHARMA_PAIRS: [(f64, f64, f64, f64, f64, f64, f64); 34] = [
        (50.0, 2.6772, -79.7751, 50.0, 0.0, -82.7485, 2.0425),
        (50.0, 3.1571, -77.2803, 50.0, 0.0, -82.7485, 2.8615),
        (50.0, 2.8361, -74.0200, 50.0, 0.0, -82.7485, 3.4412),
        (50.0, -1.3802, -84.2814, 50.0, 0.0, -82.7485, 1.0000),
        (50.0, -1.1848, -84.8006, 50.0, 0.0, -82.7485, 1.0000),
        (50.0, -0.9009, -85.5211, 50.0, 0.0, -82.7485, 1.0000),
        (50.0, 0.0, 0.0, 50.0, -1.0, 2.0, 2.3669),
        (50.0, -1.0, 2.0, 50.0, 0.0, 0.0, 2.3669),
        (50.0, 2.49, -0.001, 50.0, -2.49, 0.0009, 7.1792),
        (50.0, 2.49, -0.001, 50.0, -2.49, 0.0010, 7.1792),
        (50.0, 2.49, -0.001, 50.0, -2.49, 0.0011, 7.2195),
        (50.0, 2.49, -0.001, 50.0, -2.49, 0.0012, 7.2195),
        (50.0, -0.001, 2.49, 50.0, 0.0009, -2.49, 4.8045),
        (50.0, -0.001, 2.49, 50.0, 0.0010, -2.49, 4.8045),
        (50.0, -0.001, 2.49, 50.0, 0.0011, -2.49, 4.7461),
        (50.0, 2.5, 0.0, 50.0, 0.0, -2.5, 4.3065),
        (50.0, 2.5, 0.0, 73.0, 25.0, -18.0, 27.1492),
        (50.0, 2.5, 0.0, 61.0, -5.0, 29.0, 22.8977),
        (50.0, 2.5, 0.0, 56.0, -27.0, -3.0, 31.9030),
        (50.0, 2.5, 0.0, 58.0, 24.0, 15.0, 19.4535),
        (50.0, 2.5, 0.0, 50.0, 3.1736, 0.5854, 1.0000),
        (50.0, 2.5, 0.0, 50.0, 3.2972, 0.0, 1.0000),
        (50.0, 2.5, 0.0, 50.0, 1.8634, 0.5757, 1.0000),
        (50.0, 2.5, 0.0, 50.0, 3.2592, 0.3350, 1.0000),
        (60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644),
        (63.0109, -31.0961, -5.8663, 62.8187, -29.7946, -4.0864, 1.2630),
        (61.2901, 3.7196, -5.3901, 61.4292, 2.2480, -4.9620, 1.8731),
        (35.0831, -44.1164, 3.7933, 35.0232, -40.0716, 1.5901, 1.8645),
        (22.7233, 20.0904, -46.6940, 23.0331, 14.9730, -42.5619, 2.0373),
        (36.4612, 47.8580, 18.3852, 36.2715, 50.5065, 21.2231, 1.4146),
        (90.8027, -2.0831, 1.4410, 91.1528, -1.6435, 0.0447, 1.4441),
        (90.9257, -0.5406, -0.9208, 88.6381, -0.8985, -0.7239, 1.5381),
        (6.7747, -0.2908, -2.4247, 5.8714, -0.0985, -2.2286, 0.6377),
        (2.0776, 0.0795, -1.1350, 0.9033, -0.0636, -0.5514, 0.9082),
    ];

    #[test]
    fn test_sharma_reference_pairs() {
        for (i, &(l1, a1, b1, l2, a2, b2, expected)) in SHARMA_PAIRS.iter().enumerate() {
            let d = ciede2000(Lab::new(l1, a1, b1), Lab::new(l2, a2, b2));
            assert!(
                (d - expected).abs() < 1e-3,
                "pair {}: expected {expected:.4}, got {d:.4}",
                i + 1
            );
        }
    }

    #[test]
    fn test_symmetric() {
        for &(l1, a1, b1, l2, a2, b2, _) in &SHARMA_PAIRS {
            let x = Lab::new(l1, a1, b1);
            let y = Lab::new(l2, a2, b2);
            assert!((ciede2000(x, y) - ciede2000(y, x)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_identity_is_zero() {
        for color in [
            Color::new(0, 0, 0),
            Color::new(255, 255, 255),
            Color::new(12, 200, 77),
        ] {
            let lab = color.to_lab();
            assert_eq!(ciede2000(lab, lab), 0.0);
        }
    }

    #[test]
    fn test_black_white_is_clamped_maximum() {
        let d = ciede2000(Color::new(0, 0, 0).to_lab(), Color::new(255, 255, 255).to_lab());
        assert!(d > 99.0 && d <= MAX_DELTA_E, "got {d}");
    }

    #[test]
    fn test_matches_palette_crate() {
        use palette::color_difference::Ciede2000;

        for &(l1, a1, b1, l2, a2, b2, _) in &SHARMA_PAIRS {
            let ours = ciede2000(Lab::new(l1, a1, b1), Lab::new(l2, a2, b2));
            let x: palette::Lab<palette::white_point::D65, f64> = palette::Lab::new(l1, a1, b1);
            let y: palette::Lab<palette::white_point::D65, f64> = palette::Lab::new(l2, a2, b2);
            let theirs = x.difference(y);
            assert!(
                (ours - theirs).abs() < 1e-3,
                "ours {ours:.4} vs palette {theirs:.4}"
            );
        }
    }
}
