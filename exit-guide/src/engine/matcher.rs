//! Nearest-door search along the platform axis.

use super::round3;
use crate::domain::Door;

/// The door(s) closest to a point.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorMatch<'a> {
    /// One door, or two adjacent doors sorted by `door_index` on a tie.
    pub doors: Vec<&'a Door>,
    /// Distance to the closest door, rounded to 3 decimals.
    pub delta: f64,
}

/// Find the door(s) nearest to `x`.
///
/// `doors` must be in canonical order (non-decreasing `x`). Only the doors
/// either side of the insertion point can be nearest. When their distances
/// differ by at most `tie_threshold` both are returned. Returns `None` only
/// when `doors` is empty.
///
/// ```
/// use exit_guide::domain::Door;
/// use exit_guide::engine::nearest_doors;
///
/// let doors: Vec<Door> = [0.0, 10.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &x)| Door { door_index: i + 1, car_index: 1, door_in_car: i + 1, x })
///     .collect();
///
/// let m = nearest_doors(&doors, 4.0, 0.25).unwrap();
/// assert_eq!(m.doors.len(), 1);
/// assert_eq!(m.delta, 4.0);
///
/// let m = nearest_doors(&doors, 5.0, 0.25).unwrap();
/// assert_eq!(m.doors.len(), 2);
/// ```
pub fn nearest_doors(doors: &[Door], x: f64, tie_threshold: f64) -> Option<DoorMatch<'_>> {
    let idx = doors.partition_point(|d| d.x < x);

    // Ascending index order, at most two entries.
    let candidates: Vec<usize> = [idx.checked_sub(1), Some(idx)]
        .into_iter()
        .flatten()
        .filter(|&i| i < doors.len())
        .collect();

    let distance = |i: usize| (doors[i].x - x).abs();

    let closest = candidates
        .iter()
        .copied()
        .min_by(|&a, &b| distance(a).total_cmp(&distance(b)))?;
    let closest_distance = distance(closest);

    let chosen = match candidates.as_slice() {
        &[a, b] => {
            let other = if closest == a { b } else { a };
            if (distance(other) - closest_distance).abs() <= tie_threshold {
                vec![&doors[a], &doors[b]]
            } else {
                vec![&doors[closest]]
            }
        }
        _ => vec![&doors[closest]],
    };

    Some(DoorMatch {
        doors: chosen,
        delta: round3(closest_distance),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIE: f64 = 0.25;

    fn doors(xs: &[f64]) -> Vec<Door> {
        xs.iter()
            .enumerate()
            .map(|(i, &x)| Door {
                door_index: i + 1,
                car_index: (i / 2) as i64 + 1,
                door_in_car: i % 2 + 1,
                x,
            })
            .collect()
    }

    fn indices(m: &DoorMatch<'_>) -> Vec<usize> {
        m.doors.iter().map(|d| d.door_index).collect()
    }

    #[test]
    fn near_tie_returns_both_doors() {
        let doors = doors(&[0.0, 10.0, 20.0, 30.0]);
        let m = nearest_doors(&doors, 14.9, TIE).unwrap();
        assert_eq!(indices(&m), [2, 3]);
        assert_eq!(m.delta, 4.9);
    }

    #[test]
    fn clear_winner_returns_one_door() {
        let doors = doors(&[0.0, 10.0, 20.0, 30.0]);
        let m = nearest_doors(&doors, 5.0, TIE).unwrap();
        // 5.0 is equidistant from 0 and 10: that is a tie too.
        assert_eq!(indices(&m), [1, 2]);

        let m = nearest_doors(&doors, 2.0, TIE).unwrap();
        assert_eq!(indices(&m), [1]);
        assert_eq!(m.delta, 2.0);
    }

    #[test]
    fn closest_wins_outside_tie_window() {
        let doors = doors(&[0.0, 20.0]);
        let m = nearest_doors(&doors, 5.0, TIE).unwrap();
        assert_eq!(indices(&m), [1]);
        assert_eq!(m.delta, 5.0);

        let m = nearest_doors(&doors, 15.0, TIE).unwrap();
        assert_eq!(indices(&m), [2]);
        assert_eq!(m.delta, 5.0);
    }

    #[test]
    fn exact_hit_has_zero_delta() {
        let doors = doors(&[0.0, 10.0, 20.0]);
        let m = nearest_doors(&doors, 10.0, TIE).unwrap();
        assert_eq!(indices(&m), [2]);
        assert_eq!(m.delta, 0.0);
    }

    #[test]
    fn before_first_and_after_last() {
        let doors = doors(&[0.0, 10.0]);
        let m = nearest_doors(&doors, -3.0, TIE).unwrap();
        assert_eq!(indices(&m), [1]);
        assert_eq!(m.delta, 3.0);

        let m = nearest_doors(&doors, 12.5, TIE).unwrap();
        assert_eq!(indices(&m), [2]);
        assert_eq!(m.delta, 2.5);
    }

    #[test]
    fn single_door() {
        let doors = doors(&[7.0]);
        let m = nearest_doors(&doors, 100.0, TIE).unwrap();
        assert_eq!(indices(&m), [1]);
        assert_eq!(m.delta, 93.0);
    }

    #[test]
    fn empty_doors_has_no_match() {
        assert!(nearest_doors(&[], 1.0, TIE).is_none());
    }

    #[test]
    fn threshold_is_inclusive() {
        let doors = doors(&[0.0, 10.0]);
        // Distances 4.875 and 5.125 differ by exactly 0.25.
        let m = nearest_doors(&doors, 4.875, TIE).unwrap();
        assert_eq!(indices(&m), [1, 2]);
        assert_eq!(m.delta, 4.875);

        let m = nearest_doors(&doors, 4.75, TIE).unwrap();
        assert_eq!(indices(&m), [1]);
    }

    #[test]
    fn zero_threshold_only_ties_exact() {
        let doors = doors(&[0.0, 10.0]);
        assert_eq!(indices(&nearest_doors(&doors, 5.0, 0.0).unwrap()), [1, 2]);
        assert_eq!(indices(&nearest_doors(&doors, 5.01, 0.0).unwrap()), [2]);
    }

    #[test]
    fn delta_is_rounded() {
        let doors = doors(&[0.0]);
        let m = nearest_doors(&doors, 1.23456, TIE).unwrap();
        assert_eq!(m.delta, 1.235);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sorted_doors() -> impl Strategy<Value = Vec<Door>> {
        prop::collection::vec(-1000i32..1000, 1..30).prop_map(|mut xs| {
            xs.sort_unstable();
            xs.iter()
                .enumerate()
                .map(|(i, &x)| Door {
                    door_index: i + 1,
                    car_index: 1,
                    door_in_car: i + 1,
                    x: x as f64 / 2.0,
                })
                .collect()
        })
    }

    proptest! {
        /// A non-empty door set always yields one or two doors
        #[test]
        fn returns_one_or_two(doors in sorted_doors(), x in -600.0f64..600.0) {
            let m = nearest_doors(&doors, x, 0.25).unwrap();
            prop_assert!(matches!(m.doors.len(), 1 | 2));
        }

        /// No door is strictly closer than the reported delta
        #[test]
        fn delta_is_minimal(doors in sorted_doors(), x in -600.0f64..600.0) {
            let m = nearest_doors(&doors, x, 0.25).unwrap();
            let best = doors
                .iter()
                .map(|d| (d.x - x).abs())
                .fold(f64::INFINITY, f64::min);
            prop_assert!((m.delta - best).abs() <= 0.0005 + 1e-9);
        }

        /// Two returned doors are adjacent and sorted by door_index
        #[test]
        fn pairs_are_adjacent(doors in sorted_doors(), x in -600.0f64..600.0) {
            let m = nearest_doors(&doors, x, 0.25).unwrap();
            if let [a, b] = m.doors.as_slice() {
                prop_assert_eq!(a.door_index + 1, b.door_index);
            }
        }

        /// A point exactly halfway between two distinct doors returns both
        #[test]
        fn midpoint_is_a_tie(doors in sorted_doors(), i in any::<prop::sample::Index>()) {
            prop_assume!(doors.len() >= 2);
            let i = i.index(doors.len() - 1);
            let (a, b) = (&doors[i], &doors[i + 1]);
            prop_assume!(a.x < b.x);
            prop_assume!(i == 0 || doors[i - 1].x < a.x);
            prop_assume!(i + 2 == doors.len() || doors[i + 2].x > b.x);

            let m = nearest_doors(&doors, (a.x + b.x) / 2.0, 0.25).unwrap();
            prop_assert_eq!(
                m.doors.iter().map(|d| d.door_index).collect::<Vec<_>>(),
                vec![a.door_index, b.door_index]
            );
        }
    }
}
