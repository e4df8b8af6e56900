use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// The final shape of one base key's values.
///
/// - `String`: a single unindexed value like `page=1`
/// - `Sequence`: values collected by repetition or `[]`, like `sort[]=a&sort[]=b`
/// - `Map`: values with named indices, like `price[min]=1&price[max]=2`
///
/// `Map` holds ordered pairs rather than a hash map: entries keep the order
/// in which they were first inserted, and a repeated numeric index such as
/// `a[x]=1&a[0]=2&a[0]=3` produces two entries keyed `"0"`.
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Sequence(Vec<String>),
    Map(Vec<(String, String)>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(String, String)]> {
        match self {
            Value::Map(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Looks up `index` in a `Map` value. With repeated numeric indices the
    /// first matching entry is returned.
    ///
    /// This scans the pairs in order; collect them into a map first when
    /// looking up many indices.
    pub fn get(&self, index: &str) -> Option<&str> {
        self.as_map()?
            .iter()
            .find(|(key, _)| key == index)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Sequence(seq) => f.debug_list().entries(seq.iter()).finish(),
            Value::Map(pairs) => f
                .debug_map()
                .entries(pairs.iter().map(|(k, v)| (k, v)))
                .finish(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<String>> From<Vec<T>> for Value {
    fn from(seq: Vec<T>) -> Self {
        Value::Sequence(seq.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(seq) => {
                let mut state = serializer.serialize_seq(Some(seq.len()))?;
                for value in seq {
                    state.serialize_element(value)?;
                }
                state.end()
            }
            Value::Map(pairs) => {
                let mut state = serializer.serialize_map(Some(pairs.len()))?;
                for (key, value) in pairs {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Value;

    use pretty_assertions::assert_eq;

    #[test]
    fn accessors() {
        let map: Value = [("min", "1"), ("0", "a"), ("0", "b")].into_iter().collect();
        assert_eq!(map.get("min"), Some("1"));
        assert_eq!(map.get("0"), Some("a"));
        assert_eq!(map.get("max"), None);
        assert_eq!(map.as_str(), None);

        let seq = Value::from(vec!["a", "b"]);
        assert_eq!(seq.as_sequence(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(seq.get("0"), None);

        assert_eq!(Value::from("x").as_str(), Some("x"));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Value::from("x")), "String(\"x\")");
        assert_eq!(format!("{:?}", Value::from(vec!["a"])), "[\"a\"]");
        let map: Value = [("k", "v")].into_iter().collect();
        assert_eq!(format!("{map:?}"), "{\"k\": \"v\"}");
    }
}
