//! Result counters reported by single-document updates.

/// Counters reported by the store for an update of one document.
///
/// `matched` counts documents selected by the identifier; `modified` counts
/// documents whose contents actually changed. Writing values identical to
/// the stored ones yields `matched == 1` and `modified == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Documents selected by the update filter.
    pub matched: u64,
    /// Documents whose contents changed.
    pub modified: u64,
}

impl UpdateOutcome {
    /// Outcome of an update that selected and changed one document.
    pub const fn modified_one() -> Self {
        Self {
            matched: 1,
            modified: 1,
        }
    }

    /// Outcome of an update that selected one document but changed nothing.
    pub const fn unchanged() -> Self {
        Self {
            matched: 1,
            modified: 0,
        }
    }

    /// Outcome of an update that selected nothing.
    pub const fn missing() -> Self {
        Self {
            matched: 0,
            modified: 0,
        }
    }
}
