//! Per-word storage of explicitly supplied form values.

use std::collections::HashMap;

use declina_protocol::FormOrdinal;

/// The values a dictionary supplied for one word, keyed by form ordinal.
///
/// Words start out `Loading` and are compacted once with
/// [`FormValues::make_skinny`] after the dictionary is validated. Skinny
/// storage is sorted by ordinal and read by binary search; it never goes
/// back to a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValues {
    Loading(HashMap<FormOrdinal, String>),
    Skinny(Box<[(FormOrdinal, Box<str>)]>),
}

impl Default for FormValues {
    fn default() -> Self {
        FormValues::Loading(HashMap::new())
    }
}

impl FormValues {
    pub fn get(&self, ordinal: FormOrdinal) -> Option<&str> {
        match self {
            FormValues::Loading(map) => map.get(&ordinal).map(String::as_str),
            FormValues::Skinny(entries) => entries
                .binary_search_by_key(&ordinal, |(o, _)| *o)
                .ok()
                .map(|i| &*entries[i].1),
        }
    }

    pub fn contains(&self, ordinal: FormOrdinal) -> bool {
        self.get(ordinal).is_some()
    }

    /// Stores a value. Returns `false`, leaving the storage unchanged, once
    /// the values are skinny.
    #[must_use]
    pub fn insert(&mut self, ordinal: FormOrdinal, value: String) -> bool {
        match self {
            FormValues::Loading(map) => {
                map.insert(ordinal, value);
                true
            }
            FormValues::Skinny(_) => false,
        }
    }

    pub fn is_skinny(&self) -> bool {
        matches!(self, FormValues::Skinny(_))
    }

    pub fn len(&self) -> usize {
        match self {
            FormValues::Loading(map) => map.len(),
            FormValues::Skinny(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every stored value, ordered by ordinal.
    pub fn entries(&self) -> Vec<(FormOrdinal, &str)> {
        match self {
            FormValues::Loading(map) => {
                let mut entries: Vec<_> = map.iter().map(|(o, v)| (*o, v.as_str())).collect();
                entries.sort_unstable_by_key(|(o, _)| *o);
                entries
            }
            FormValues::Skinny(entries) => entries.iter().map(|(o, v)| (*o, &**v)).collect(),
        }
    }

    /// Any one stored value, preferring the lowest ordinal.
    pub fn first(&self) -> Option<&str> {
        match self {
            FormValues::Loading(map) => map.iter().min_by_key(|(o, _)| **o).map(|(_, v)| v.as_str()),
            FormValues::Skinny(entries) => entries.first().map(|(_, v)| &**v),
        }
    }

    /// Compacts the values into a sorted slice. Calling it again is a no-op.
    pub fn make_skinny(&mut self) {
        if let FormValues::Loading(map) = self {
            let mut entries: Vec<(FormOrdinal, Box<str>)> =
                map.drain().map(|(o, v)| (o, v.into_boxed_str())).collect();
            entries.sort_unstable_by_key(|(o, _)| *o);
            *self = FormValues::Skinny(entries.into_boxed_slice());
        }
    }

    /// A loading copy of these values, for modifying a compacted word.
    pub fn to_loading(&self) -> FormValues {
        match self {
            FormValues::Loading(map) => FormValues::Loading(map.clone()),
            FormValues::Skinny(entries) => FormValues::Loading(
                entries.iter().map(|(o, v)| (*o, v.to_string())).collect(),
            ),
        }
    }
}

impl FromIterator<(FormOrdinal, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FormOrdinal, String)>>(iter: I) -> Self {
        FormValues::Loading(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ord(n: u32) -> FormOrdinal {
        FormOrdinal::new(n)
    }

    #[test]
    fn skinny_keeps_every_value() {
        let mut values = FormValues::default();
        assert!(values.insert(ord(3), "drei".into()));
        assert!(values.insert(ord(1), "eins".into()));
        assert!(values.insert(ord(2), "zwei".into()));
        values.make_skinny();

        assert!(values.is_skinny());
        assert_eq!(values.get(ord(1)), Some("eins"));
        assert_eq!(values.get(ord(3)), Some("drei"));
        assert_eq!(values.get(ord(0)), None);
        assert_eq!(values.first(), Some("eins"));
        let ordinals: Vec<u32> = values.entries().iter().map(|(o, _)| o.get()).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
    }

    #[test]
    fn skinny_values_are_frozen() {
        let mut values: FormValues = [(ord(0), "a".to_string())].into_iter().collect();
        values.make_skinny();
        values.make_skinny();
        assert!(!values.insert(ord(1), "b".into()));
        assert_eq!(values.len(), 1);

        let mut copy = values.to_loading();
        assert!(copy.insert(ord(1), "b".into()));
        assert_eq!(copy.get(ord(0)), Some("a"));
        assert_eq!(values.get(ord(1)), None);
    }
}
