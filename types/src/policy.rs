//! Two-state options of the operations.
//!
//! Each flag is an enum rather than a `bool` so call sites read as what they
//! do. `From<bool>` maps `true` to the first variant.

/// Whether `remove_special_chars` keeps whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpacePolicy {
    #[default]
    Keep,
    Strip,
}

/// Whether `remove_duplicates` keeps first-occurrence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderPolicy {
    #[default]
    Preserve,
    Unordered,
}

/// Whether `merge_dicts` recurses into values that are both mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergeDepth {
    #[default]
    Shallow,
    Deep,
}

impl From<bool> for SpacePolicy {
    fn from(keep_spaces: bool) -> Self {
        if keep_spaces { Self::Keep } else { Self::Strip }
    }
}

impl From<bool> for OrderPolicy {
    fn from(preserve_order: bool) -> Self {
        if preserve_order {
            Self::Preserve
        } else {
            Self::Unordered
        }
    }
}

impl From<bool> for MergeDepth {
    fn from(deep: bool) -> Self {
        if deep { Self::Deep } else { Self::Shallow }
    }
}
