//! Egress points and their classification.

use std::fmt;

use serde::Serialize;

use super::door::DoorRef;

/// Kind of egress point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EgressType {
    Escalator,
    Stairs,
    Elevator,
    Other,
}

/// Icon codes with a known egress type. Anything else is [`EgressType::Other`].
const ICON_TYPES: &[(&str, EgressType)] = &[
    ("esc", EgressType::Escalator),
    ("el", EgressType::Elevator),
    ("stair", EgressType::Stairs),
];

impl EgressType {
    /// All types, in display order.
    pub const ALL: [EgressType; 4] = [
        EgressType::Escalator,
        EgressType::Stairs,
        EgressType::Elevator,
        EgressType::Other,
    ];

    /// Classify an icon code from the Egresses input.
    ///
    /// ```
    /// use exit_guide::domain::EgressType;
    ///
    /// assert_eq!(EgressType::from_icon("esc"), EgressType::Escalator);
    /// assert_eq!(EgressType::from_icon("ramp"), EgressType::Other);
    /// ```
    pub fn from_icon(icon: &str) -> Self {
        let icon = icon.trim();
        ICON_TYPES
            .iter()
            .find(|(code, _)| *code == icon)
            .map(|(_, ty)| *ty)
            .unwrap_or(EgressType::Other)
    }

    /// The wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EgressType::Escalator => "escalator",
            EgressType::Stairs => "stairs",
            EgressType::Elevator => "elevator",
            EgressType::Other => "other",
        }
    }
}

impl fmt::Display for EgressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An egress point matched to its nearest door(s).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Egress {
    #[serde(rename = "type")]
    pub egress_type: EgressType,
    /// Display label; empty when neither an exit label nor a description exists.
    pub label: String,
    pub x: f64,
    /// Distance to the closest matched door.
    pub delta: Option<f64>,
    /// One door, or two sorted by `door_index` when they tie.
    pub doors: Vec<DoorRef>,
}
