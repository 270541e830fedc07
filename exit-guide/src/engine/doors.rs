//! Door indexing.
//!
//! Groups door rows into cars, numbers the doors inside each car, and
//! gives every door a platform-wide index in `x` order. That order is
//! the one the matcher searches.

use std::collections::HashMap;

use tracing::debug;

use super::error::BuildError;
use super::round3;
use crate::domain::{CarKey, Door, DoorStats};
use crate::input::DoorRow;

const DOORS_FILE: &str = "Doors.csv";

/// How car indices are assigned, decided once per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarNumbering {
    /// Every car key is an integer; the key is the car index.
    NumericCarKeys,
    /// At least one key is not; cars are numbered 1, 2, 3... in first-seen order.
    OrdinalCarKeys,
}

impl CarNumbering {
    pub fn resolve<'a>(keys: impl IntoIterator<Item = &'a CarKey>) -> Self {
        if keys.into_iter().all(|k| k.as_number().is_some()) {
            CarNumbering::NumericCarKeys
        } else {
            CarNumbering::OrdinalCarKeys
        }
    }
}

/// Doors in canonical order with their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorLayout {
    /// Sorted by `door_index`, which is also non-decreasing `x`.
    pub doors: Vec<Door>,
    pub stats: DoorStats,
}

/// A parsed door row. `id` is the input position, used to break ties.
struct Entry {
    id: usize,
    key: CarKey,
    x: f64,
}

/// Parse a required coordinate. Blank, non-numeric and non-finite values are rejected.
pub(crate) fn parse_coordinate(
    raw: &str,
    file: &'static str,
) -> Result<f64, BuildError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .ok_or_else(|| BuildError::InvalidNumber {
            file,
            field: "x",
            value: raw.to_string(),
        })
}

/// Index every door row.
///
/// Fails on the first row whose `x` cannot be parsed.
pub fn index_doors(rows: &[DoorRow]) -> Result<DoorLayout, BuildError> {
    let entries = rows
        .iter()
        .enumerate()
        .map(|(id, row)| {
            Ok(Entry {
                id,
                key: CarKey::parse(&row.car),
                x: parse_coordinate(&row.x, DOORS_FILE)?,
            })
        })
        .collect::<Result<Vec<_>, BuildError>>()?;

    let numbering = CarNumbering::resolve(entries.iter().map(|e| &e.key));

    // Groups in first-seen order.
    let mut group_of: HashMap<&CarKey, usize> = HashMap::new();
    let mut groups: Vec<(&CarKey, Vec<&Entry>)> = Vec::new();
    for entry in &entries {
        let slot = *group_of.entry(&entry.key).or_insert_with(|| {
            groups.push((&entry.key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(entry);
    }

    // Ordered on the raw coordinate; rounding is for output only.
    let mut placed: Vec<(f64, Door)> = Vec::with_capacity(entries.len());
    for (ordinal, (key, members)) in groups.iter_mut().enumerate() {
        let car_index = match (numbering, key.as_number()) {
            (CarNumbering::NumericCarKeys, Some(n)) => n,
            _ => ordinal as i64 + 1,
        };

        members.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.id.cmp(&b.id)));
        for (pos, entry) in members.iter().enumerate() {
            let door = Door {
                door_index: 0,
                car_index,
                door_in_car: pos + 1,
                x: round3(entry.x),
            };
            placed.push((entry.x, door));
        }
    }

    placed.sort_by(|(xa, a), (xb, b)| {
        xa.total_cmp(xb)
            .then(a.car_index.cmp(&b.car_index))
            .then(a.door_in_car.cmp(&b.door_in_car))
    });
    let doors: Vec<Door> = placed
        .into_iter()
        .enumerate()
        .map(|(pos, (_, door))| Door {
            door_index: pos + 1,
            ..door
        })
        .collect();

    let sizes: Vec<usize> = groups.iter().map(|(_, members)| members.len()).collect();
    let stats = DoorStats {
        door_count: doors.len(),
        car_count: groups.len(),
        doors_per_car: most_common(&sizes).unwrap_or(0),
        doors_per_car_min: sizes.iter().copied().min().unwrap_or(0),
        doors_per_car_max: sizes.iter().copied().max().unwrap_or(0),
    };

    debug!(?numbering, doors = stats.door_count, cars = stats.car_count, "Indexed doors");

    Ok(DoorLayout { doors, stats })
}

/// The most frequent value; ties go to the value seen first.
fn most_common(values: &[usize]) -> Option<usize> {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for &v in values {
        match counts.iter_mut().find(|(value, _)| *value == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }
    // max_by_key keeps the last maximum, so search in reverse.
    counts
        .iter()
        .rev()
        .max_by_key(|(_, n)| *n)
        .map(|(value, _)| *value)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn door_rows() -> impl Strategy<Value = Vec<DoorRow>> {
        prop::collection::vec(
            (
                prop_oneof![
                    (1i64..6).prop_map(|n| n.to_string()),
                    Just(String::new()),
                    "[A-C]",
                ],
                -500i32..500,
            ),
            0..40,
        )
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(car, x)| DoorRow::new(&car, &format!("{}", x as f64 / 4.0)))
                .collect()
        })
    }

    proptest! {
        /// door_index is exactly 1..=N
        #[test]
        fn door_index_is_contiguous(rows in door_rows()) {
            let layout = index_doors(&rows).unwrap();
            let indices: Vec<usize> = layout.doors.iter().map(|d| d.door_index).collect();
            let expected: Vec<usize> = (1..=rows.len()).collect();
            prop_assert_eq!(indices, expected);
        }

        /// x never decreases in door_index order
        #[test]
        fn x_is_monotonic(rows in door_rows()) {
            let layout = index_doors(&rows).unwrap();
            for pair in layout.doors.windows(2) {
                prop_assert!(pair[0].x <= pair[1].x);
            }
        }

        /// door_in_car is 1..=k within every car
        #[test]
        fn door_in_car_is_contiguous_per_car(rows in door_rows()) {
            let layout = index_doors(&rows).unwrap();
            let mut per_car: HashMap<i64, Vec<usize>> = HashMap::new();
            for door in &layout.doors {
                per_car.entry(door.car_index).or_default().push(door.door_in_car);
            }
            for (_, mut positions) in per_car {
                positions.sort_unstable();
                let expected: Vec<usize> = (1..=positions.len()).collect();
                prop_assert_eq!(positions, expected);
            }
        }

        /// Stats agree with the door list
        #[test]
        fn stats_are_consistent(rows in door_rows()) {
            let layout = index_doors(&rows).unwrap();
            let stats = layout.stats;
            prop_assert_eq!(stats.door_count, layout.doors.len());
            prop_assert!(stats.doors_per_car_min <= stats.doors_per_car);
            prop_assert!(stats.doors_per_car <= stats.doors_per_car_max);
        }
    }
}
