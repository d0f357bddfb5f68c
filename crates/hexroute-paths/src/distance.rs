use hexroute_core::Hex;

/// Hex-grid (cube) distance between two coordinates.
#[inline]
pub fn hex_distance(a: Hex, b: Hex) -> i32 {
    a.distance(b)
}

/// Hex distance scaled by the cheapest possible step.
///
/// When step costs vary, plain grid distance overestimates as soon as some
/// step costs less than 1; scaling by the minimum step cost keeps the
/// estimate admissible. A `min_step_cost` of 0 degrades to Dijkstra.
#[inline]
pub fn scaled_hex_distance(a: Hex, b: Hex, min_step_cost: i32) -> i32 {
    a.distance(b).saturating_mul(min_step_cost.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_distance() {
        let a = Hex::axial(0, 0);
        let b = Hex::axial(3, -1);
        assert_eq!(hex_distance(a, b), 3);
        assert_eq!(scaled_hex_distance(a, b, 1), 3);
        assert_eq!(scaled_hex_distance(a, b, 2), 6);
        assert_eq!(scaled_hex_distance(a, b, 0), 0);
        assert_eq!(scaled_hex_distance(a, b, -4), 0);
    }
}
