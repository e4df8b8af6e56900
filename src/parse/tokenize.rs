use indexmap::IndexMap;

use crate::Config;

use super::decode::decode;

/// Decoded raw keys mapped to their values, both in encounter order.
pub type RawFields = IndexMap<String, Vec<String>>;

/// Splits a querystring into decoded `(key, values)` groups.
///
/// Empty fields are skipped and a field without `=` is a key with a blank
/// value. Blank values are dropped when `keep_blank_values` is off. Strict
/// mode and field limits are enforced by [`Config`] before this runs.
pub fn tokenize(input: &str, config: &Config) -> RawFields {
    let mut fields = RawFields::default();

    for field in input.split(config.separator) {
        if field.is_empty() {
            continue;
        }
        let (key, value) = field.split_once('=').unwrap_or((field, ""));
        if value.is_empty() && !config.keep_blank_values {
            continue;
        }

        fields
            .entry(decode(key).into_owned())
            .or_default()
            .push(decode(value).into_owned());
    }

    fields
}

#[cfg(test)]
mod test {
    use super::{RawFields, tokenize};
    use crate::Config;

    use pretty_assertions::assert_eq;

    fn fields(entries: &[(&str, &[&str])]) -> RawFields {
        entries
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    #[test]
    fn groups_repeated_keys() {
        assert_eq!(
            tokenize("a[]=1&b=2&a[]=3", &Config::new()),
            fields(&[("a[]", &["1", "3"]), ("b", &["2"])])
        );
    }

    #[test]
    fn blank_and_missing_values() {
        assert_eq!(
            tokenize("a=&flag&&b==c", &Config::new()),
            fields(&[("a", &[""]), ("flag", &[""]), ("b", &["=c"])])
        );
        assert_eq!(
            tokenize("a=&flag&b=1", &Config::new().keep_blank_values(false)),
            fields(&[("b", &["1"])])
        );
    }

    #[test]
    fn decodes_keys_and_values() {
        assert_eq!(
            tokenize("price%5Bmin%5D=1+000&q=a%26b", &Config::new()),
            fields(&[("price[min]", &["1 000"]), ("q", &["a&b"])])
        );
    }

    #[test]
    fn custom_separator() {
        assert_eq!(
            tokenize("a=1;b=2&c", &Config::new().separator(';')),
            fields(&[("a", &["1"]), ("b", &["2&c"])])
        );
    }
}
