//! Named lookup tables over the operations.
//!
//! Each group is a fixed, immutable table from operation name to a function
//! taking positional [`Value`] arguments. Trailing optional arguments may be
//! omitted and take their documented defaults:
//!
//! | group    | operation              | arguments                                   |
//! |----------|------------------------|---------------------------------------------|
//! | `string` | `capitalize_words`     | text                                        |
//! | `string` | `remove_special_chars` | text, keep_spaces = true                    |
//! | `string` | `truncate_string`      | text, length, suffix = "..."                |
//! | `list`   | `chunk_list`           | list, chunk_size                            |
//! | `list`   | `remove_duplicates`    | list, preserve_order = true                 |
//! | `list`   | `flatten_list`         | value                                       |
//! | `dict`   | `merge_dicts`          | map, map, deep = false                      |
//! | `dict`   | `filter_dict`          | map, list of keys                           |
//! | `dict`   | `invert_dict`          | map                                         |

use std::fmt;

use tidy_types::{
    DEFAULT_TRUNCATE_SUFFIX, Key, Mapping, MergeDepth, OpError, OpResult, OrderPolicy,
    SpacePolicy, Value,
};

use crate::{dict, list, string};

/// A table entry: positional arguments in, one value out.
pub type OpFn = fn(&[Value]) -> OpResult<Value>;

/// A fixed group of named operations.
pub struct OpTable {
    group: &'static str,
    entries: &'static [(&'static str, OpFn)],
}

impl fmt::Debug for OpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpTable")
            .field("group", &self.group)
            .field("operations", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl OpTable {
    #[must_use]
    pub const fn group(&self) -> &'static str {
        self.group
    }

    /// Operation names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<OpFn> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, op)| *op)
    }

    pub fn call(&self, name: &str, args: &[Value]) -> OpResult<Value> {
        let op = self
            .get(name)
            .ok_or_else(|| OpError::unknown_operation(self.group, name))?;
        op(args)
    }
}

pub static STRING_OPS: OpTable = OpTable {
    group: "string",
    entries: &[
        ("capitalize_words", capitalize_words),
        ("remove_special_chars", remove_special_chars),
        ("truncate_string", truncate_string),
    ],
};

pub static LIST_OPS: OpTable = OpTable {
    group: "list",
    entries: &[
        ("chunk_list", chunk_list),
        ("remove_duplicates", remove_duplicates),
        ("flatten_list", flatten_list),
    ],
};

pub static DICT_OPS: OpTable = OpTable {
    group: "dict",
    entries: &[
        ("merge_dicts", merge_dicts),
        ("filter_dict", filter_dict),
        ("invert_dict", invert_dict),
    ],
};

/// All three tables.
#[must_use]
pub fn tables() -> [&'static OpTable; 3] {
    [&STRING_OPS, &LIST_OPS, &DICT_OPS]
}

/// Find the table for `group`.
#[must_use]
pub fn table(group: &str) -> Option<&'static OpTable> {
    tables().into_iter().find(|t| t.group == group)
}

/// Resolve `group.name` to its function.
pub fn lookup(group: &str, name: &str) -> OpResult<OpFn> {
    table(group)
        .and_then(|t| t.get(name))
        .ok_or_else(|| OpError::unknown_operation(group, name))
}

// ── Argument marshalling ─────────────────────────────────────

/// Positional arguments of one call, checked against the operation's arity.
struct Args<'a> {
    op: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn new(
        op: &'static str,
        values: &'a [Value],
        required: usize,
        optional: usize,
    ) -> OpResult<Self> {
        let max = required + optional;
        if values.len() < required || values.len() > max {
            let expected = if optional == 0 {
                format!("{required}")
            } else {
                format!("{required} to {max}")
            };
            return Err(OpError::invalid_argument(
                op,
                format!("expected {expected} arguments, got {}", values.len()),
            ));
        }
        Ok(Self { op, values })
    }

    fn value(&self, index: usize) -> &'a Value {
        &self.values[index]
    }

    fn str(&self, index: usize) -> OpResult<&'a str> {
        let value = self.value(index);
        value
            .as_str()
            .ok_or_else(|| OpError::type_mismatch(self.op, "str", value))
    }

    fn int(&self, index: usize) -> OpResult<i64> {
        let value = self.value(index);
        value
            .as_int()
            .ok_or_else(|| OpError::type_mismatch(self.op, "int", value))
    }

    fn list(&self, index: usize) -> OpResult<&'a [Value]> {
        let value = self.value(index);
        value
            .as_list()
            .ok_or_else(|| OpError::type_mismatch(self.op, "list", value))
    }

    fn map(&self, index: usize) -> OpResult<&'a Mapping> {
        let value = self.value(index);
        value
            .as_map()
            .ok_or_else(|| OpError::type_mismatch(self.op, "map", value))
    }

    fn str_or(&self, index: usize, default: &'a str) -> OpResult<&'a str> {
        if index < self.values.len() {
            self.str(index)
        } else {
            Ok(default)
        }
    }

    fn bool_or(&self, index: usize, default: bool) -> OpResult<bool> {
        match self.values.get(index) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| OpError::type_mismatch(self.op, "bool", value)),
        }
    }

    /// A non-negative integer; negatives are invalid rather than mistyped.
    fn size(&self, index: usize, what: &str) -> OpResult<usize> {
        let n = self.int(index)?;
        usize::try_from(n).map_err(|_| {
            OpError::invalid_argument(self.op, format!("{what} must not be negative, got {n}"))
        })
    }
}

// ── String group ─────────────────────────────────────────────

fn capitalize_words(values: &[Value]) -> OpResult<Value> {
    let args = Args::new("capitalize_words", values, 1, 0)?;
    Ok(Value::Str(string::capitalize_words(args.str(0)?)))
}

fn remove_special_chars(values: &[Value]) -> OpResult<Value> {
    let args = Args::new("remove_special_chars", values, 1, 1)?;
    let spaces = SpacePolicy::from(args.bool_or(1, true)?);
    Ok(Value::Str(
        string::remove_special_chars(args.str(0)?, spaces).into_owned(),
    ))
}

fn truncate_string(values: &[Value]) -> OpResult<Value> {
    let args = Args::new("truncate_string", values, 2, 1)?;
    let text = args.str(0)?;
    let length = args.size(1, "length")?;
    let suffix = args.str_or(2, DEFAULT_TRUNCATE_SUFFIX)?;
    string::truncate_string(text, length, suffix).map(Value::Str)
}

// ── List group ───────────────────────────────────────────────

fn chunk_list(values: &[Value]) -> OpResult<Value> {
    let args = Args::new("chunk_list", values, 2, 0)?;
    let items = args.list(0)?;
    let chunk_size = args.size(1, "chunk size")?;
    let chunks = list::chunk_list(items, chunk_size)?;
    Ok(Value::List(chunks.into_iter().map(Value::List).collect()))
}

fn remove_duplicates(values: &[Value]) -> OpResult<Value> {
    let args = Args::new("remove_duplicates", values, 1, 1)?;
    let order = OrderPolicy::from(args.bool_or(1, true)?);
    list::remove_duplicate_values(args.list(0)?, order).map(Value::List)
}

fn flatten_list(values: &[Value]) -> OpResult<Value> {
    let args = Args::new("flatten_list", values, 1, 0)?;
    Ok(Value::List(list::flatten_value(args.value(0).clone())))
}

// ── Dict group ───────────────────────────────────────────────

fn merge_dicts(values: &[Value]) -> OpResult<Value> {
    let args = Args::new("merge_dicts", values, 2, 1)?;
    let depth = MergeDepth::from(args.bool_or(2, false)?);
    Ok(Value::Map(dict::merge_dicts(args.map(0)?, args.map(1)?, depth)))
}

fn filter_dict(values: &[Value]) -> OpResult<Value> {
    let args = Args::new("filter_dict", values, 2, 0)?;
    let map = args.map(0)?;
    let keys = args
        .list(1)?
        .iter()
        .map(|key| {
            key.as_key()
                .ok_or_else(|| OpError::type_mismatch("filter_dict", "hashable value", key))
        })
        .collect::<OpResult<Vec<Key>>>()?;
    Ok(Value::Map(dict::filter_dict(map, &keys)))
}

fn invert_dict(values: &[Value]) -> OpResult<Value> {
    let args = Args::new("invert_dict", values, 1, 0)?;
    dict::invert_mapping(args.map(0)?).map(Value::Map)
}
