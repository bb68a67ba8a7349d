//! Unit conversion utilities.
//!
//! Layout is computed in inches and points; OOXML stores lengths in EMUs.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Convert inches to EMUs, truncating toward zero.
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

/// Font sizes are written in hundredths of a point (`sz="3200"` for 32 pt).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches_to_emu(1.0), 914_400);
        assert_eq!(inches_to_emu(10.0), 9_144_000);
        assert_eq!(inches_to_emu(5.625), 5_143_500);
        assert_eq!(inches_to_emu(0.05), 45_720);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_centipoints(32.0), 3200);
        assert_eq!(pt_to_centipoints(14.0), 1400);
    }
}
