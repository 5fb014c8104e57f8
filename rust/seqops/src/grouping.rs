//! Grouping of sequence elements by key.
//!
//! [`Grouping`] is the result of [`SequenceExt::group_by`](crate::SequenceExt::group_by)
//! and [`SequenceExt::group_by_selector`](crate::SequenceExt::group_by_selector): an
//! insertion-ordered mapping from each key to the elements that share it.
//! [`KeySelector`] describes how the key is taken from an element.

use std::{borrow::Borrow, borrow::Cow, fmt, hash::Hash};

use ahash::AHashMap;
use seqops_common::{Result, verify_selector};

use crate::properties::Properties;

/// Insertion-ordered mapping from a key to the group of elements sharing it.
///
/// Keys are kept in the order they were first seen, groups keep the relative order
/// of their elements. Lookup by key goes through a hash index into the ordered
/// storage.
///
/// # Examples
///
/// ```
/// use seqops::SequenceExt;
///
/// let words = ["apple", "bob", "avocado", "bean"];
/// let by_initial = words.group_by(|w| w.chars().next());
///
/// assert_eq!(by_initial.len(), 2);
/// assert_eq!(by_initial.keys(), &[Some('a'), Some('b')]);
/// assert_eq!(by_initial.get(&Some('b')), Some(&["bob", "bean"][..]));
/// ```
#[derive(Clone)]
pub struct Grouping<K, T> {
    /// Keys in first-occurrence order.
    keys: Vec<K>,
    /// Groups, parallel to `keys`.
    groups: Vec<Vec<T>>,
    /// Maps a key to its position in `keys` and `groups`.
    index: AHashMap<K, usize>,
}

impl<K, T> Grouping<K, T> {
    /// Creates a new empty `Grouping`.
    pub fn new() -> Grouping<K, T> {
        Grouping {
            keys: Vec::new(),
            groups: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the keys in first-occurrence order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Returns an iterator over `(key, group)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.keys
            .iter()
            .zip(self.groups.iter().map(Vec::as_slice))
    }

    /// Consumes the `Grouping` and returns the `(key, group)` pairs in order.
    pub fn into_groups(self) -> Vec<(K, Vec<T>)> {
        self.keys.into_iter().zip(self.groups).collect()
    }
}

impl<K, T> Grouping<K, T>
where
    K: Eq + Hash,
{
    /// Returns the group for `key`, or `None` if no element produced that key.
    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&i| self.groups[i].as_slice())
    }

    /// Returns `true` if some element produced `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K, T> Grouping<K, T>
where
    K: Eq + Hash + Clone,
{
    /// Appends `item` to the group of `key`, opening a new group if the key is new.
    pub fn push(&mut self, key: K, item: T) {
        match self.index.get(&key) {
            Some(&i) => self.groups[i].push(item),
            None => {
                self.index.insert(key.clone(), self.keys.len());
                self.keys.push(key);
                self.groups.push(vec![item]);
            }
        }
    }
}

impl<K, T> Default for Grouping<K, T> {
    fn default() -> Self {
        Grouping::new()
    }
}

impl<K: PartialEq, T: PartialEq> PartialEq for Grouping<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.groups == other.groups
    }
}

impl<K: Eq, T: Eq> Eq for Grouping<K, T> {}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for Grouping<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys.iter().zip(self.groups.iter()))
            .finish()
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<Vec<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.groups)
    }
}

/// Describes how a grouping key is taken from an element.
///
/// A selector is either a key function or the name of a property, looked up on every
/// element through [`Properties`]. A property selector yields `Option` keys: elements
/// without the property are grouped under `None`. An empty property name cannot be
/// resolved and makes the grouping fail.
///
/// ```
/// use std::collections::HashMap;
/// use seqops::{KeySelector, SequenceExt};
///
/// let rows: Vec<HashMap<String, u32>> = vec![
///     HashMap::from([("team".to_string(), 1)]),
///     HashMap::from([("team".to_string(), 2)]),
///     HashMap::new(),
///     HashMap::from([("team".to_string(), 1)]),
/// ];
///
/// let teams = rows.group_by_selector(KeySelector::property("team")).unwrap();
/// assert_eq!(teams.keys(), &[Some(1), Some(2), None]);
///
/// let unnamed = rows.group_by_selector(KeySelector::property(""));
/// assert!(unnamed.unwrap_err().is_invalid_selector());
/// ```
pub enum KeySelector<'a, T, K> {
    Function(Box<dyn Fn(&T) -> K + 'a>),
    Property {
        name: Cow<'a, str>,
        lookup: fn(&T, &str) -> K,
    },
}

impl<'a, T, K> KeySelector<'a, T, K> {
    pub fn function(f: impl Fn(&T) -> K + 'a) -> Self {
        KeySelector::Function(Box::new(f))
    }

    /// Short description used in diagnostics.
    pub fn describe(&self) -> &str {
        match self {
            KeySelector::Function(_) => "<function>",
            KeySelector::Property { name, .. } => name,
        }
    }
}

impl<'a, T, V> KeySelector<'a, T, Option<V>> {
    pub fn property(name: impl Into<Cow<'a, str>>) -> Self
    where
        T: Properties<V>,
    {
        KeySelector::Property {
            name: name.into(),
            lookup: <T as Properties<V>>::property,
        }
    }
}

impl<T, K> fmt::Debug for KeySelector<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySelector::Function(_) => f.write_str("Function(..)"),
            KeySelector::Property { name, .. } => {
                f.debug_tuple("Property").field(name).finish()
            }
        }
    }
}

pub(crate) fn group_with<T, K, F>(items: &[T], mut selector: F) -> Grouping<K, T>
where
    F: FnMut(&T) -> K,
    K: Eq + Hash + Clone,
    T: Clone,
{
    let mut grouping = Grouping::new();
    for item in items {
        grouping.push(selector(item), item.clone());
    }
    grouping
}

pub(crate) fn group_with_selector<T, K>(
    items: &[T],
    selector: KeySelector<'_, T, K>,
) -> Result<Grouping<K, T>>
where
    K: Eq + Hash + Clone,
    T: Clone,
{
    if let KeySelector::Property { name, .. } = &selector {
        if name.is_empty() {
            log::warn!("group_by: rejected selector {selector:?}");
        }
        verify_selector!(selector.describe(), !name.is_empty());
    }
    let grouping = match selector {
        KeySelector::Function(f) => group_with(items, |item| f(item)),
        KeySelector::Property { name, lookup } => group_with(items, |item| lookup(item, &name)),
    };
    Ok(grouping)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::SequenceExt;

    #[test]
    fn test_group_by_length() {
        let grouping = ["a", "b", "c"].group_by(|s| s.len());
        assert_eq!(grouping.len(), 1);
        assert_eq!(grouping.get(&1), Some(&["a", "b", "c"][..]));
        assert!(grouping.get(&2).is_none());
    }

    #[test]
    fn test_first_occurrence_order() {
        let grouping = [5, 2, 8, 3, 4, 7].group_by(|x| x % 3);
        assert_eq!(grouping.keys(), &[2, 0, 1]);
        let groups = grouping.into_groups();
        assert_eq!(
            groups,
            vec![(2, vec![5, 2, 8]), (0, vec![3]), (1, vec![4, 7])]
        );
    }

    #[test]
    fn test_empty() {
        let grouping = Vec::<u32>::new().group_by(|x| *x);
        assert!(grouping.is_empty());
        assert_eq!(grouping, Grouping::default());
        assert_eq!(format!("{grouping:?}"), "{}");
    }

    #[test]
    fn test_borrowed_lookup() {
        let grouping = ["x1", "y1", "x2"].group_by(|s| s[..1].to_string());
        assert!(grouping.contains_key("x"));
        assert_eq!(grouping.get("x"), Some(&["x1", "x2"][..]));
        assert_eq!(format!("{grouping:?}"), r#"{"x": ["x1", "x2"], "y": ["y1"]}"#);
    }

    #[test]
    fn test_function_selector_needs_no_properties() {
        let grouping = [1, 2, 3, 4]
            .group_by_selector(KeySelector::function(|x: &i32| *x > 2))
            .unwrap();
        let pairs: Vec<_> = grouping.into_iter().collect();
        assert_eq!(pairs, vec![(false, vec![1, 2]), (true, vec![3, 4])]);
    }

    fn row(kind: &str, id: &str) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("kind".to_string(), kind.to_string()),
            ("id".to_string(), id.to_string()),
        ])
    }

    #[test]
    fn test_property_selector() {
        let rows = vec![row("fruit", "1"), row("veg", "2"), row("fruit", "3")];
        let grouping = rows.group_by_selector(KeySelector::property("kind")).unwrap();
        assert_eq!(
            grouping.keys(),
            &[Some("fruit".to_string()), Some("veg".to_string())]
        );
        assert_eq!(
            grouping.get(&Some("fruit".to_string())).map(<[_]>::len),
            Some(2)
        );
    }

    #[test]
    fn test_missing_property_groups_under_none() {
        let rows = vec![BTreeMap::new(), row("fruit", "1"), BTreeMap::new()];
        let grouping = rows.group_by_selector(KeySelector::property("kind")).unwrap();
        assert_eq!(grouping.keys(), &[None, Some("fruit".to_string())]);
        assert_eq!(grouping.get(&None).map(<[_]>::len), Some(2));

        let grouping = rows.group_by_selector(KeySelector::property("color")).unwrap();
        assert_eq!(grouping.len(), 1);
        assert_eq!(grouping.get(&None).map(<[_]>::len), Some(3));
    }

    #[test]
    fn test_empty_property_name_is_rejected() {
        let rows = vec![row("fruit", "1")];
        let err = rows
            .group_by_selector(KeySelector::property(""))
            .unwrap_err();
        assert!(err.is_invalid_selector());
        assert!(err.to_string().starts_with("invalid selector '':"));

        let empty: Vec<BTreeMap<String, String>> = Vec::new();
        assert!(
            empty
                .group_by_selector(KeySelector::property(""))
                .unwrap_err()
                .is_invalid_selector()
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_property_selector() {
        let rows = vec![
            serde_json::json!({"k": "a", "n": 1}),
            serde_json::json!({"k": 1}),
            serde_json::json!({"k": "a"}),
        ];
        let grouping = rows.group_by_selector(KeySelector::property("k")).unwrap();
        assert_eq!(
            grouping.keys(),
            &[Some("a".to_string()), Some("1".to_string())]
        );
        assert_eq!(grouping.get(&Some("a".to_string())).map(<[_]>::len), Some(2));

        let grouping = rows.group_by_selector(KeySelector::property("n")).unwrap();
        assert_eq!(grouping.keys(), &[Some("1".to_string()), None]);
        assert_eq!(grouping.get(&None).map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_describe() {
        let s: KeySelector<'_, BTreeMap<String, u32>, Option<u32>> =
            KeySelector::property("name");
        assert_eq!(s.describe(), "name");
        assert_eq!(format!("{s:?}"), r#"Property("name")"#);
        let s: KeySelector<'_, u32, u32> = KeySelector::function(|x| *x);
        assert_eq!(s.describe(), "<function>");
    }
}
