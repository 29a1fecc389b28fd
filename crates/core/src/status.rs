//! Closed enumerations stored as SMALLINT or TEXT columns.
//!
//! Integer-backed enums keep the discriminants the database CHECK
//! constraints allow, so a row can always be decoded with
//! `#[sqlx(try_from = "i16")]`. Over JSON they travel by name
//! (`"DOWNLOADED"`, `"NOT_DOWNLOADED"`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// A stored value that does not correspond to any enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }

        impl TryFrom<StatusId> for $name {
            type Error = UnknownVariant;

            fn try_from(value: StatusId) -> Result<Self, Self::Error> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.id() == value)
                    .ok_or_else(|| UnknownVariant {
                        kind: stringify!($name),
                        value: value.to_string(),
                    })
            }
        }
    };
}

define_status_enum! {
    /// Whether the OSM labels inside an AOI have been fetched.
    DownloadStatus (default NotDownloaded) {
        Downloaded = 1,
        Running = 0,
        NotDownloaded = -1,
    }
}

define_status_enum! {
    /// Dataset lifecycle status.
    DatasetStatus (default Active) {
        Archived = 1,
        Active = 0,
        Draft = -1,
    }
}

define_status_enum! {
    /// Model lifecycle status.
    ModelStatus (default Draft) {
        Archived = 1,
        Published = 0,
        Draft = -1,
    }
}

// ---------------------------------------------------------------------------
// Training status
// ---------------------------------------------------------------------------

/// Training status is free-form text; these are the values the service
/// itself writes. No transitions are enforced.
pub const TRAINING_SUBMITTED: &str = "SUBMITTED";
pub const TRAINING_RUNNING: &str = "RUNNING";
pub const TRAINING_FINISHED: &str = "FINISHED";
pub const TRAINING_FAILED: &str = "FAILED";

pub const KNOWN_TRAINING_STATUSES: &[&str] = &[
    TRAINING_SUBMITTED,
    TRAINING_RUNNING,
    TRAINING_FINISHED,
    TRAINING_FAILED,
];

// ---------------------------------------------------------------------------
// Feedback type
// ---------------------------------------------------------------------------

/// Classification of a prediction a user gave feedback on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FeedbackType {
    #[default]
    #[serde(rename = "TP")]
    TruePositive,
    #[serde(rename = "TN")]
    TrueNegative,
    #[serde(rename = "FP")]
    FalsePositive,
    #[serde(rename = "FN")]
    FalseNegative,
}

impl FeedbackType {
    pub const ALL: &'static [FeedbackType] = &[
        FeedbackType::TruePositive,
        FeedbackType::TrueNegative,
        FeedbackType::FalsePositive,
        FeedbackType::FalseNegative,
    ];

    /// The stored code (`TP`, `TN`, `FP`, `FN`).
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackType::TruePositive => "TP",
            FeedbackType::TrueNegative => "TN",
            FeedbackType::FalsePositive => "FP",
            FeedbackType::FalseNegative => "FN",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for FeedbackType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FeedbackType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or(UnknownVariant {
                kind: "FeedbackType",
                value,
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
