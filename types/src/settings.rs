//! Resolved operation defaults shared across crates.
//!
//! Raw TOML deserialization structs (with `Option` fields and `bool` flags)
//! stay private in `tidy-config`. The config loader resolves them into
//! [`OpsDefaults`] at the parse boundary.

use crate::{MergeDepth, OrderPolicy, SpacePolicy};

/// Suffix appended by `truncate_string` when none is given.
pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

/// Defaults applied for the optional arguments of the operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpsDefaults {
    truncate_suffix: String,
    space_policy: SpacePolicy,
    order_policy: OrderPolicy,
    merge_depth: MergeDepth,
}

impl Default for OpsDefaults {
    fn default() -> Self {
        Self {
            truncate_suffix: DEFAULT_TRUNCATE_SUFFIX.to_string(),
            space_policy: SpacePolicy::default(),
            order_policy: OrderPolicy::default(),
            merge_depth: MergeDepth::default(),
        }
    }
}

impl OpsDefaults {
    #[must_use]
    pub fn new(
        truncate_suffix: impl Into<String>,
        space_policy: SpacePolicy,
        order_policy: OrderPolicy,
        merge_depth: MergeDepth,
    ) -> Self {
        Self {
            truncate_suffix: truncate_suffix.into(),
            space_policy,
            order_policy,
            merge_depth,
        }
    }

    #[must_use]
    pub fn truncate_suffix(&self) -> &str {
        &self.truncate_suffix
    }

    #[must_use]
    pub const fn space_policy(&self) -> SpacePolicy {
        self.space_policy
    }

    #[must_use]
    pub const fn order_policy(&self) -> OrderPolicy {
        self.order_policy
    }

    #[must_use]
    pub const fn merge_depth(&self) -> MergeDepth {
        self.merge_depth
    }
}
