//! The flat, string-keyed record every table renders.

use std::collections::{BTreeMap, HashMap};

/// A row of market data addressed by wire column key.
///
/// Values come back from the backend as display strings: plain text,
/// numbers with thousands separators, or the `-` placeholder. Absent keys
/// and `null` values both read as `None`.
pub trait Record {
    /// Returns the display value stored under `key`, if any.
    fn field(&self, key: &str) -> Option<&str>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> Option<&str> {
        (**self).field(key)
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl Record for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Implements [`Record`] for a typed record by mapping wire keys to fields.
///
/// Every mapped field must be an `Option<FieldText>`.
macro_rules! record_fields {
    ($ty:ty { $($key:literal => $field:ident),+ $(,)? }) => {
        impl $ty {
            /// Wire keys exposed through [`Record::field`](crate::models::Record::field).
            pub const KEYS: &'static [&'static str] = &[$($key),+];
        }

        impl $crate::models::Record for $ty {
            fn field(&self, key: &str) -> Option<&str> {
                match key {
                    $($key => self.$field.as_deref(),)+
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btree_map_record() {
        let mut row = BTreeMap::new();
        row.insert("isuNm".to_string(), "삼성전자".to_string());
        assert_eq!(row.field("isuNm"), Some("삼성전자"));
        assert_eq!(row.field("clsprc"), None);
    }

    #[test]
    fn test_hash_map_record_through_reference() {
        let mut row = HashMap::new();
        row.insert("clpr".to_string(), "2,450.12".to_string());
        let by_ref = &row;
        assert_eq!(by_ref.field("clpr"), Some("2,450.12"));
    }
}
