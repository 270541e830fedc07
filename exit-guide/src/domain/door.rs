//! Train doors and car keys.

use std::fmt;

use serde::Serialize;

/// The car a door row belongs to, as written in the input.
///
/// Keys that parse as integers compare by value, so `"01"` and `"1"`
/// name the same car. Anything else (including a blank cell) is kept
/// verbatim and forms its own group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarKey {
    Numeric(i64),
    Raw(String),
}

impl CarKey {
    /// Classify a raw car cell.
    ///
    /// ```
    /// use exit_guide::domain::CarKey;
    ///
    /// assert_eq!(CarKey::parse(" 3 "), CarKey::Numeric(3));
    /// assert_eq!(CarKey::parse("A"), CarKey::Raw("A".to_string()));
    /// assert_eq!(CarKey::parse(""), CarKey::Raw(String::new()));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => CarKey::Numeric(n),
            Err(_) => CarKey::Raw(trimmed.to_string()),
        }
    }

    /// Returns the numeric value, if this key is numeric.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            CarKey::Numeric(n) => Some(*n),
            CarKey::Raw(_) => None,
        }
    }
}

impl fmt::Display for CarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarKey::Numeric(n) => write!(f, "{n}"),
            CarKey::Raw(s) => f.write_str(s),
        }
    }
}

/// A numbered train door on the platform axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    /// 1-based position in the platform-wide order.
    pub door_index: usize,
    /// Car number, either the numeric car key or the first-seen ordinal.
    pub car_index: i64,
    /// 1-based position within the car.
    pub door_in_car: usize,
    /// Platform-axis coordinate.
    pub x: f64,
}

/// The part of a [`Door`] that egress records refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoorRef {
    pub door_index: usize,
    pub car_index: i64,
    pub door_in_car: usize,
}

impl From<&Door> for DoorRef {
    fn from(door: &Door) -> Self {
        Self {
            door_index: door.door_index,
            car_index: door.car_index,
            door_in_car: door.door_in_car,
        }
    }
}

/// Summary of the door layout, shown for diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DoorStats {
    pub door_count: usize,
    pub car_count: usize,
    /// Most common number of doors per car.
    pub doors_per_car: usize,
    pub doors_per_car_min: usize,
    pub doors_per_car_max: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_keys_compare_by_value() {
        assert_eq!(CarKey::parse("01"), CarKey::parse("1"));
        assert_eq!(CarKey::parse("+4"), CarKey::Numeric(4));
        assert_eq!(CarKey::parse("-2"), CarKey::Numeric(-2));
    }

    #[test]
    fn non_numeric_keys_are_trimmed() {
        assert_eq!(CarKey::parse("  B "), CarKey::Raw("B".to_string()));
        assert_eq!(CarKey::parse("1.5"), CarKey::Raw("1.5".to_string()));
        assert_eq!(CarKey::parse("   "), CarKey::Raw(String::new()));
    }

    #[test]
    fn as_number() {
        assert_eq!(CarKey::Numeric(7).as_number(), Some(7));
        assert_eq!(CarKey::Raw("7a".into()).as_number(), None);
    }

    #[test]
    fn display() {
        assert_eq!(CarKey::Numeric(12).to_string(), "12");
        assert_eq!(CarKey::Raw("lead".into()).to_string(), "lead");
    }

    #[test]
    fn door_ref_drops_coordinate() {
        let door = Door {
            door_index: 5,
            car_index: 2,
            door_in_car: 1,
            x: 42.5,
        };
        let r = DoorRef::from(&door);
        assert_eq!(r.door_index, 5);
        assert_eq!(r.car_index, 2);
        assert_eq!(r.door_in_car, 1);

        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"door_index":5,"car_index":2,"door_in_car":1}"#);
    }
}
