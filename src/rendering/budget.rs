//! Character-budget policy.
//!
//! Output size is counted in characters: one per Braille cell plus one
//! line separator between rows. An image over budget is scaled down
//! uniformly until it fits.

use crate::error::ConvertError;

/// Characters needed to render a `width x height` pixel image.
///
/// `ceil(w/2) * ceil(h/4)` cells plus `ceil(h/4) - 1` separators.
pub fn char_cost(width: u32, height: u32) -> u64 {
    let char_width = u64::from(width.div_ceil(2));
    let char_height = u64::from(height.div_ceil(4));
    char_width * char_height + char_height.saturating_sub(1)
}

/// Largest dimensions, at the same aspect ratio, whose output fits
/// in `limit` characters.
///
/// Both sides are scaled by `sqrt(limit / cost)` and floored, never below
/// one pixel. Flooring cells can still leave the result a little over
/// budget, so the step repeats until it fits or the image is 1x1.
pub fn fit_dimensions(width: u32, height: u32, limit: u64) -> Result<(u32, u32), ConvertError> {
    if limit == 0 {
        return Err(ConvertError::InvalidLimit(limit));
    }

    let (mut w, mut h) = (width, height);
    loop {
        let cost = char_cost(w, h);
        if cost <= limit || (w <= 1 && h <= 1) {
            break;
        }
        let ratio = (limit as f64 / cost as f64).sqrt();
        // ratio < 1, so each side shrinks unless it is already 1.
        w = ((f64::from(w) * ratio).floor() as u32).max(1);
        h = ((f64::from(h) * ratio).floor() as u32).max(1);
    }

    if (w, h) != (width, height) {
        tracing::info!(
            from_width = width,
            from_height = height,
            to_width = w,
            to_height = h,
            cost = char_cost(w, h),
            limit,
            "Downscaling image to fit character limit"
        );
    }
    Ok((w, h))
}
