//! Random number generation, identifiers, and random colors.
//!
//! Provides seeded RNG construction plus the catalog's randomized
//! helpers. Every function takes the RNG as a parameter; there is no
//! process-wide generator and no implicit seeding.
//!
//! # Reproducibility
//!
//! For reproducible results, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given
//! seed on the same platform.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::error::MathError;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` for high performance. The sequence is deterministic
/// for a given seed on the same platform.
///
/// # Examples
/// ```
/// use mathkit::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws a uniform random integer between `min` and `max`, inclusive.
///
/// Non-integer bounds are tightened inward: `min` is rounded up and
/// `max` rounded down before sampling, so the result is always an
/// integer inside the requested interval.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `min > max`, or if the
/// interval contains no integer after tightening.
///
/// # Examples
/// ```
/// use mathkit::random::{create_rng, random_int};
/// let mut rng = create_rng(42);
/// let n = random_int(1.0, 6.0, &mut rng).unwrap();
/// assert!((1..=6).contains(&n));
/// ```
pub fn random_int<R: Rng>(min: f64, max: f64, rng: &mut R) -> Result<i64, MathError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(MathError::InvalidRange(format!(
            "need finite min <= max, got min={min}, max={max}"
        )));
    }
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    if lo > hi {
        return Err(MathError::InvalidRange(format!(
            "no integer lies in [{min}, {max}]"
        )));
    }
    Ok(rng.random_range(lo..=hi))
}

/// Generates a unique-enough identifier of the form
/// `prefix_<timestamp36>_<random36>`: the current epoch milliseconds
/// and a random tail, both rendered in base 36.
///
/// Not a UUID; collisions are improbable, not impossible. Only the
/// tail is reproducible under a seeded RNG; the middle segment is a
/// wall clock.
///
/// # Examples
/// ```
/// use mathkit::random::{create_rng, generate_id};
/// let mut rng = create_rng(42);
/// let id = generate_id("job", &mut rng);
/// assert!(id.starts_with("job_"));
/// ```
pub fn generate_id<R: Rng>(prefix: &str, rng: &mut R) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let timestamp = base36(millis, 8);
    let tail = base36(rng.random::<u64>() & 0xFF_FFFF, 5);
    format!("{prefix}_{timestamp}_{tail}")
}

/// Lowercase base-36 rendering of `value`, left-padded with zeros.
fn base36(mut value: u64, width: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    while out.len() < width {
        out.push(b'0');
    }
    out.reverse();
    String::from_utf8(out).expect("base-36 digits are ASCII")
}

/// Output format for [`random_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)` with channels in 0–255
    Rgb,
    /// `hsl(h, s%, l%)` with h in 0–360, s and l in 0–100
    Hsl,
}

/// Generates a random color string in the requested format.
///
/// # Examples
/// ```
/// use mathkit::random::{create_rng, random_color, ColorFormat};
/// let mut rng = create_rng(42);
/// let hex = random_color(ColorFormat::Hex, &mut rng);
/// assert_eq!(hex.len(), 7);
/// assert!(hex.starts_with('#'));
/// ```
pub fn random_color<R: Rng>(format: ColorFormat, rng: &mut R) -> String {
    match format {
        ColorFormat::Hex => format!("#{:06x}", rng.random_range(0..0x1000000u32)),
        ColorFormat::Rgb => {
            let r: u8 = rng.random();
            let g: u8 = rng.random();
            let b: u8 = rng.random();
            format!("rgb({r}, {g}, {b})")
        }
        ColorFormat::Hsl => {
            let h = rng.random_range(0..=360u32);
            let s = rng.random_range(0..=100u32);
            let l = rng.random_range(0..=100u32);
            format!("hsl({h}, {s}%, {l}%)")
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_random_int_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let n = random_int(1.0, 6.0, &mut rng).unwrap();
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn test_random_int_non_integer_bounds_tighten() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let n = random_int(0.5, 3.5, &mut rng).unwrap();
            assert!((1..=3).contains(&n));
        }
    }

    #[test]
    fn test_random_int_degenerate_interval() {
        let mut rng = create_rng(0);
        assert_eq!(random_int(5.0, 5.0, &mut rng).unwrap(), 5);
        assert!(matches!(
            random_int(6.0, 5.0, &mut rng),
            Err(MathError::InvalidRange(_))
        ));
        // no integer between 1.2 and 1.8
        assert!(matches!(
            random_int(1.2, 1.8, &mut rng),
            Err(MathError::InvalidRange(_))
        ));
        assert!(random_int(f64::NAN, 1.0, &mut rng).is_err());
    }

    #[test]
    fn test_generate_id_shape() {
        let mut rng = create_rng(42);
        let id = generate_id("neko", &mut rng);
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "neko");
        assert!(parts[1].len() >= 8);
        assert!(parts[2].len() >= 5);
        assert!(parts[1..]
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_alphanumeric())));
    }

    #[test]
    fn test_generate_id_distinct() {
        let mut rng = create_rng(42);
        let a = generate_id("x", &mut rng);
        let b = generate_id("x", &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_id_middle_segment_is_timestamp() {
        let mut rng = create_rng(42);
        let id = generate_id("x", &mut rng);
        let middle = id.split('_').nth(1).unwrap();
        let decoded = u64::from_str_radix(middle, 36).unwrap();
        // epoch milliseconds, so comfortably past 2020-01-01
        assert!(decoded > 1_577_836_800_000, "decoded {decoded}");
    }

    #[test]
    fn test_random_color_hex() {
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let hex = random_color(ColorFormat::Hex, &mut rng);
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(u32::from_str_radix(&hex[1..], 16).is_ok());
        }
    }

    #[test]
    fn test_random_color_rgb_hsl_shapes() {
        let mut rng = create_rng(42);
        let rgb = random_color(ColorFormat::Rgb, &mut rng);
        assert!(rgb.starts_with("rgb(") && rgb.ends_with(')'));
        let hsl = random_color(ColorFormat::Hsl, &mut rng);
        assert!(hsl.starts_with("hsl(") && hsl.ends_with("%)"));
    }

    #[test]
    fn test_base36_padding() {
        assert_eq!(base36(0, 5), "00000");
        assert_eq!(base36(35, 2), "0z");
        assert_eq!(base36(36, 2), "10");
    }
}
