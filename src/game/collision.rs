//! Segment intersection tests used for self and opponent collisions.

use serde::{Deserialize, Serialize};

use crate::game::geometry::{Orientation, Segment};

/// How two segments of the same orientation are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameAxisPolicy {
    /// Colliding whenever the fixed coordinate is exactly equal, whatever the ranges.
    ExactCoordinate,
    /// Equal fixed coordinate and strictly overlapping ranges.
    IntervalOverlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOrientation {
    Vertical,
    Horizontal,
    Mixed,
}

pub fn pair_orientation(a: &Segment, b: &Segment) -> PairOrientation {
    match (a.orientation(), b.orientation()) {
        (Orientation::Vertical, Orientation::Vertical) => PairOrientation::Vertical,
        (Orientation::Horizontal, Orientation::Horizontal) => PairOrientation::Horizontal,
        _ => PairOrientation::Mixed,
    }
}

/// Whether `live` touches `other` under the given same-axis policy.
///
/// Perpendicular segments only collide when they properly cross: the crossing
/// point must lie strictly inside both, so meeting at an endpoint is not a hit.
pub fn intersects(live: &Segment, other: &Segment, policy: SameAxisPolicy) -> bool {
    match pair_orientation(live, other) {
        PairOrientation::Mixed => crosses(live, other),
        PairOrientation::Vertical | PairOrientation::Horizontal => {
            same_axis(policy, live.span(), other.span())
        }
    }
}

fn crosses(a: &Segment, b: &Segment) -> bool {
    match (*a, *b) {
        (Segment::Vertical { x, top_y, bottom_y }, Segment::Horizontal { y, left_x, right_x })
        | (Segment::Horizontal { y, left_x, right_x }, Segment::Vertical { x, top_y, bottom_y }) => {
            left_x < x && x < right_x && top_y < y && y < bottom_y
        }
        _ => false,
    }
}

fn same_axis(policy: SameAxisPolicy, a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
    let (a_at, a_lo, a_hi) = a;
    let (b_at, b_lo, b_hi) = b;
    match policy {
        SameAxisPolicy::ExactCoordinate => a_at == b_at,
        SameAxisPolicy::IntervalOverlap => a_at == b_at && a_lo.max(b_lo) < a_hi.min(b_hi),
    }
}

/// Index of the first segment in `others` that `live` collides with. `None`
/// means the live segment is clear of the whole set.
pub fn first_intersection(live: &Segment, others: &[Segment], policy: SameAxisPolicy) -> Option<usize> {
    others.iter().position(|other| intersects(live, other, policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXACT: SameAxisPolicy = SameAxisPolicy::ExactCoordinate;
    const OVERLAP: SameAxisPolicy = SameAxisPolicy::IntervalOverlap;

    fn v(x: f64, top_y: f64, bottom_y: f64) -> Segment {
        Segment::Vertical { x, top_y, bottom_y }
    }

    fn h(y: f64, left_x: f64, right_x: f64) -> Segment {
        Segment::Horizontal { y, left_x, right_x }
    }

    #[test]
    fn pair_orientation_classifies() {
        assert_eq!(pair_orientation(&v(1.0, 0.0, 1.0), &v(2.0, 0.0, 1.0)), PairOrientation::Vertical);
        assert_eq!(pair_orientation(&h(1.0, 0.0, 1.0), &h(2.0, 0.0, 1.0)), PairOrientation::Horizontal);
        assert_eq!(pair_orientation(&v(1.0, 0.0, 1.0), &h(2.0, 0.0, 1.0)), PairOrientation::Mixed);
        assert_eq!(pair_orientation(&h(1.0, 0.0, 1.0), &v(2.0, 0.0, 1.0)), PairOrientation::Mixed);
    }

    #[test]
    fn crossing_segments_collide_in_either_order() {
        let vertical = v(50.0, 0.0, 100.0);
        let horizontal = h(40.0, 0.0, 100.0);
        assert!(intersects(&vertical, &horizontal, EXACT));
        assert!(intersects(&horizontal, &vertical, EXACT));
    }

    #[test]
    fn touching_endpoints_do_not_collide() {
        // Corner of an L-shaped turn.
        assert!(!intersects(&v(320.0, -100.0, 200.0), &h(200.0, 20.0, 320.0), EXACT));
        // T-junction where the vertical ends on the horizontal.
        assert!(!intersects(&v(50.0, 0.0, 40.0), &h(40.0, 0.0, 100.0), EXACT));
    }

    #[test]
    fn exact_policy_flags_equal_coordinate_regardless_of_range() {
        // Parallel trails on the same column, far apart vertically.
        assert!(intersects(&v(10.0, 0.0, 5.0), &v(10.0, 300.0, 400.0), EXACT));
        // Overlapping ranges on different columns are missed by this rule.
        assert!(!intersects(&v(10.0, 0.0, 100.0), &v(11.0, 0.0, 100.0), EXACT));
    }

    #[test]
    fn overlap_policy_requires_shared_range() {
        assert!(!intersects(&v(10.0, 0.0, 5.0), &v(10.0, 300.0, 400.0), OVERLAP));
        assert!(intersects(&h(10.0, 0.0, 50.0), &h(10.0, 40.0, 90.0), OVERLAP));
        // Consecutive segments sharing only an endpoint.
        assert!(!intersects(&h(10.0, 0.0, 50.0), &h(10.0, 50.0, 90.0), OVERLAP));
    }

    #[test]
    fn first_intersection_reports_index() {
        let others = [h(10.0, 0.0, 20.0), v(30.0, 0.0, 20.0), h(5.0, 0.0, 100.0)];
        let live = v(50.0, 0.0, 10.0);
        assert_eq!(first_intersection(&live, &others, EXACT), Some(2));
        assert_eq!(first_intersection(&live, &others[..2], EXACT), None);
        assert_eq!(first_intersection(&live, &[], EXACT), None);
    }
}
