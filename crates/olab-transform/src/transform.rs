//! Record transforms
//!
//! Clone, merge, pick and path extraction over [`Record`]s, plus the list
//! helpers used for sequence destructuring. Every function here is total and
//! leaves its inputs untouched.

use olab_model::{Record, RecordPath, Value};

/// Copy `source`, then insert-or-replace every key of `overrides`
///
/// Pre-existing keys keep their position in `source`; new keys follow in
/// the order they appear in `overrides`.
///
/// # Examples
/// ```
/// # use olab_model::{Record, Value};
/// # use olab_transform::clone_with_overrides;
/// let student = Record::new().with("name", "Alice").with("age", 21);
/// let clone = clone_with_overrides(&student, &Record::new().with("gpa", 4));
/// assert_eq!(clone.len(), 3);
/// assert_eq!(student.len(), 2);
/// ```
#[must_use]
pub fn clone_with_overrides(source: &Record, overrides: &Record) -> Record {
    let mut result = source.clone();
    for (key, value) in overrides {
        result.insert(key.clone(), value.clone());
    }
    result
}

/// Merge two records, right side wins on collisions
#[inline]
#[must_use]
pub fn merge_records(a: &Record, b: &Record) -> Record {
    clone_with_overrides(a, b)
}

/// Left-to-right merge of any number of records
///
/// Returns an empty record for empty input.
#[must_use]
pub fn merge_all<'a>(records: impl IntoIterator<Item = &'a Record>) -> Record {
    records
        .into_iter()
        .fold(Record::new(), |acc, next| merge_records(&acc, next))
}

/// One field of a [`pick`]
#[derive(Debug, Clone, PartialEq)]
pub struct PickField {
    key: String,
    rename: Option<String>,
    default: Option<Value>,
}

impl PickField {
    /// Pick `key` as-is
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rename: None,
            default: None,
        }
    }

    /// Write the picked value under `target` instead of the source key
    #[inline]
    #[must_use]
    pub fn renamed(mut self, target: impl Into<String>) -> Self {
        self.rename = Some(target.into());
        self
    }

    /// Substitute `default` when the source key is absent
    #[inline]
    #[must_use]
    pub fn or_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Source key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key written into the result
    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.key)
    }
}

/// Read, rename and default-fill fields from `source`
///
/// A field with no source value and no default stays absent from the
/// result. Never fails.
#[must_use]
pub fn pick(source: &Record, fields: &[PickField]) -> Record {
    let mut result = Record::new();
    for field in fields {
        if let Some(value) = source.get(&field.key).or(field.default.as_ref()) {
            result.insert(field.target(), value.clone());
        }
    }
    result
}

/// Walk nested records along `path`
///
/// Returns `None` when a segment is missing, when an intermediate value is
/// not a record, or for the root path.
#[must_use]
pub fn extract_path<'a>(source: &'a Record, path: &RecordPath) -> Option<&'a Value> {
    let (last, parents) = path.segments().split_last()?;
    let mut current = source;
    for segment in parents {
        current = current.get(segment)?.as_record()?;
    }
    current.get(last)
}

/// New list holding `a` followed by `b`
#[must_use]
pub fn concat_lists<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    result.extend_from_slice(a);
    result.extend_from_slice(b);
    result
}

/// First `n` elements, or all of them when the list is shorter
#[must_use]
pub fn take_leading<T: Clone>(xs: &[T], n: usize) -> Vec<T> {
    xs.iter().take(n).cloned().collect()
}

/// Head and rest of a list
#[must_use]
pub fn split_first<T: Clone>(xs: &[T]) -> (Option<T>, Vec<T>) {
    match xs.split_first() {
        Some((head, rest)) => (Some(head.clone()), rest.to_vec()),
        None => (None, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Record {
        Record::new()
            .with("name", "Alice Johnson")
            .with("age", 21)
            .with("enrolled", true)
    }

    #[test]
    fn clone_with_empty_overrides_is_identity() {
        let source = student();
        let clone = clone_with_overrides(&source, &Record::new());
        assert_eq!(clone, source);
    }

    #[test]
    fn clone_key_order_source_then_new() {
        let overrides = Record::new().with("gpa", 4).with("age", 22);
        let clone = clone_with_overrides(&student(), &overrides);

        let keys: Vec<_> = clone.keys().collect();
        assert_eq!(keys, vec!["name", "age", "enrolled", "gpa"]);
        assert_eq!(clone.get("age"), Some(&Value::from(22)));
    }

    #[test]
    fn merge_right_wins() {
        let a = Record::new().with("x", 1).with("y", 2);
        let b = Record::new().with("y", 3).with("z", 4);
        let merged = merge_records(&a, &b);

        assert_eq!(merged.get("x"), Some(&Value::from(1)));
        assert_eq!(merged.get("y"), Some(&Value::from(3)));
        assert_eq!(merged.get("z"), Some(&Value::from(4)));
    }

    #[test]
    fn merge_all_folds_left_to_right() {
        let a = Record::new().with("k", 1);
        let b = Record::new().with("k", 2);
        let c = Record::new().with("k", 3).with("only_c", true);

        let merged = merge_all([&a, &b, &c]);
        assert_eq!(merged.get("k"), Some(&Value::from(3)));
        assert_eq!(merged.len(), 2);
        assert!(merge_all(std::iter::empty()).is_empty());
    }

    #[test]
    fn pick_renames_and_defaults() {
        let fields = [
            PickField::new("age").renamed("studentAge"),
            PickField::new("graduationYear").or_default(2025),
            PickField::new("missing"),
        ];
        let picked = pick(&student(), &fields);

        assert_eq!(picked.get("studentAge"), Some(&Value::from(21)));
        assert_eq!(picked.get("graduationYear"), Some(&Value::from(2025)));
        assert!(!picked.contains_key("missing"));
        assert!(!picked.contains_key("age"));
    }

    #[test]
    fn pick_prefers_present_value_over_default() {
        let picked = pick(&student(), &[PickField::new("age").or_default(99)]);
        assert_eq!(picked.get("age"), Some(&Value::from(21)));
    }

    #[test]
    fn extract_path_walks_nested() {
        let source = Record::new().with("a", Record::new().with("b", 1));
        let path: RecordPath = "a.b".parse().unwrap();
        assert_eq!(extract_path(&source, &path), Some(&Value::from(1)));
    }

    #[test]
    fn extract_path_missing_or_not_record() {
        let source = Record::new()
            .with("a", Record::new().with("b", 1))
            .with("s", "text");

        assert_eq!(extract_path(&source, &"a.c".parse().unwrap()), None);
        assert_eq!(extract_path(&source, &"a.b.c".parse().unwrap()), None);
        assert_eq!(extract_path(&source, &"s.x".parse().unwrap()), None);
        assert_eq!(extract_path(&source, &RecordPath::root()), None);
    }

    #[test]
    fn concat_preserves_order_and_inputs() {
        let a = vec![1, 2];
        let b = vec![3];
        assert_eq!(concat_lists(&a, &b), vec![1, 2, 3]);
        assert_eq!(a, vec![1, 2]);
        assert_eq!(b, vec![3]);
    }

    #[test]
    fn leading_and_head_rest() {
        let courses = ["JS", "React", "Node"];
        assert_eq!(take_leading(&courses, 2), vec!["JS", "React"]);
        assert_eq!(take_leading(&courses, 10).len(), 3);

        let (first, rest) = split_first(&courses);
        assert_eq!(first, Some("JS"));
        assert_eq!(rest, vec!["React", "Node"]);

        let (none, empty) = split_first::<u8>(&[]);
        assert!(none.is_none());
        assert!(empty.is_empty());
    }

    proptest::proptest! {
        #[test]
        fn prop_take_leading_is_prefix(
            xs in proptest::collection::vec(0u8..100, 0..12),
            n in 0usize..16,
        ) {
            let leading = take_leading(&xs, n);
            proptest::prop_assert_eq!(leading.len(), n.min(xs.len()));
            proptest::prop_assert_eq!(&leading[..], &xs[..leading.len()]);
        }

        #[test]
        fn prop_split_first_reassembles(xs in proptest::collection::vec(0u8..100, 0..12)) {
            let (first, rest) = split_first(&xs);
            let rebuilt: Vec<u8> = first.into_iter().chain(rest).collect();
            proptest::prop_assert_eq!(rebuilt, xs);
        }
    }
}
