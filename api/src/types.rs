//! Enumerations and small shared shapes of the console schema.
//!
//! Enum values travel as SCREAMING_SNAKE_CASE strings both on the wire
//! and through `Display`/`FromStr`.

use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;

pub use govern_graphql::Role;

macro_rules! schema_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
            EnumIter,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
        pub enum $name {
            $($variant),+
        }
    };
}

schema_enum!(AssetType { Physical, Virtual });

schema_enum!(
    /// Lifecycle of a continual improvement.
    ContinualImprovementStatus { Open, InProgress, Closed }
);

schema_enum!(Priority { Low, Medium, High });

schema_enum!(ObligationStatus {
    NonCompliant,
    PartiallyCompliant,
    Compliant,
});

schema_enum!(RightsRequestType {
    Access,
    Deletion,
    Portability,
});

schema_enum!(RightsRequestState { Todo, InProgress, Done });

schema_enum!(
    /// What a snapshot freezes.
    SnapshotType { Risks, Vendors, Assets, Data }
);

schema_enum!(DocumentVersionStatus { Draft, Published });

schema_enum!(DocumentVersionSignatureState { Requested, Signed });

schema_enum!(NonconformityStatus { Open, InProgress, Closed });

schema_enum!(TaskState { Todo, Done });

schema_enum!(InvitationStatus {
    Pending,
    Accepted,
    Expired,
});

/// A people profile referenced by owner/assignee fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
}
