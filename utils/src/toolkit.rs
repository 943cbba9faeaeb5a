//! Operations bound to a set of configured defaults.

use std::borrow::Cow;
use std::hash::Hash;

use indexmap::IndexMap;
use tidy_types::{Mapping, Nested, OpResult, OpsDefaults, Value};

use crate::{dict, list, string};

/// The nine operations with their optional arguments filled from [`OpsDefaults`].
///
/// ```
/// use tidy_types::{MergeDepth, OpsDefaults, OrderPolicy, SpacePolicy};
/// use tidy_utils::Toolkit;
///
/// let tk = Toolkit::new(OpsDefaults::new(
///     "~",
///     SpacePolicy::Strip,
///     OrderPolicy::Preserve,
///     MergeDepth::Deep,
/// ));
/// assert_eq!(tk.truncate("abcdef", 4).unwrap(), "abc~");
/// assert_eq!(tk.remove_special_chars("a b-c"), "abc");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Toolkit {
    defaults: OpsDefaults,
}

impl Toolkit {
    #[must_use]
    pub fn new(defaults: OpsDefaults) -> Self {
        Self { defaults }
    }

    #[must_use]
    pub fn defaults(&self) -> &OpsDefaults {
        &self.defaults
    }

    #[must_use]
    pub fn capitalize_words(&self, text: &str) -> String {
        string::capitalize_words(text)
    }

    #[must_use]
    pub fn remove_special_chars<'a>(&self, text: &'a str) -> Cow<'a, str> {
        string::remove_special_chars(text, self.defaults.space_policy())
    }

    pub fn truncate(&self, text: &str, length: usize) -> OpResult<String> {
        string::truncate_string(text, length, self.defaults.truncate_suffix())
    }

    pub fn chunk<T: Clone>(&self, items: &[T], chunk_size: usize) -> OpResult<Vec<Vec<T>>> {
        list::chunk_list(items, chunk_size)
    }

    #[must_use]
    pub fn dedup<T: Clone + Eq + Hash>(&self, items: &[T]) -> Vec<T> {
        list::remove_duplicates(items, self.defaults.order_policy())
    }

    pub fn dedup_values(&self, items: &[Value]) -> OpResult<Vec<Value>> {
        list::remove_duplicate_values(items, self.defaults.order_policy())
    }

    #[must_use]
    pub fn flatten<T: Clone>(&self, nested: &[Nested<T>]) -> Vec<T> {
        list::flatten_list(nested)
    }

    #[must_use]
    pub fn merge(&self, base: &Mapping, overlay: &Mapping) -> Mapping {
        dict::merge_dicts(base, overlay, self.defaults.merge_depth())
    }

    #[must_use]
    pub fn filter<'k, K, V, I>(&self, map: &IndexMap<K, V>, keys: I) -> IndexMap<K, V>
    where
        K: Clone + Eq + Hash + 'k,
        V: Clone,
        I: IntoIterator<Item = &'k K>,
    {
        dict::filter_dict(map, keys)
    }

    pub fn invert(&self, map: &Mapping) -> OpResult<Mapping> {
        dict::invert_mapping(map)
    }
}
