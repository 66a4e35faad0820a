//! Generation lifecycle status, mapping to the `generation_statuses`
//! SMALLINT lookup table.
//!
//! Variant discriminants match the seed data order (1-based) in the
//! migration; `as_str` values are the exact names clients poll for.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

/// Lifecycle of one calendar generation.
///
/// `ProcessingPreview -> AwaitingPurchase -> ProcessingFull` followed by one
/// of the terminal states `Completed`, `Partial`, or `Failed`.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    ProcessingPreview = 1,
    AwaitingPurchase = 2,
    ProcessingFull = 3,
    Completed = 4,
    Partial = 5,
    Failed = 6,
}

impl GenerationStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Resolve a database status ID back to the enum.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::ProcessingPreview),
            2 => Some(Self::AwaitingPurchase),
            3 => Some(Self::ProcessingFull),
            4 => Some(Self::Completed),
            5 => Some(Self::Partial),
            6 => Some(Self::Failed),
            _ => None,
        }
    }

    /// Client-facing status name, identical to the lookup-table seed.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProcessingPreview => "processing_preview",
            Self::AwaitingPurchase => "awaiting_purchase",
            Self::ProcessingFull => "processing_full",
            Self::Completed => "completed",
            Self::Partial => "partial",
            Self::Failed => "failed",
        }
    }

    /// Whether the generation has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Partial | Self::Failed)
    }
}

impl From<GenerationStatus> for StatusId {
    fn from(value: GenerationStatus) -> Self {
        value as StatusId
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for status in [
            GenerationStatus::ProcessingPreview,
            GenerationStatus::AwaitingPurchase,
            GenerationStatus::ProcessingFull,
            GenerationStatus::Completed,
            GenerationStatus::Partial,
            GenerationStatus::Failed,
        ] {
            assert_eq!(GenerationStatus::from_id(status.id()), Some(status));
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(GenerationStatus::from_id(0), None);
        assert_eq!(GenerationStatus::from_id(7), None);
    }

    #[test]
    fn terminal_states() {
        assert!(GenerationStatus::Completed.is_terminal());
        assert!(GenerationStatus::Partial.is_terminal());
        assert!(GenerationStatus::Failed.is_terminal());
        assert!(!GenerationStatus::ProcessingFull.is_terminal());
        assert!(!GenerationStatus::AwaitingPurchase.is_terminal());
    }
}
