use crate::error::{Error, Result};
use crate::parse::{self, Params};

/// Configuration for querystring tokenization.
///
/// The `Config` struct allows you to customize how the raw querystring is
/// split into fields before the bracket-notation merge runs. The merge rules
/// themselves are fixed.
///
/// ## Field limit
///
/// The `max_fields` parameter bounds the number of separator-delimited
/// fields accepted. This is useful when parsing untrusted input, where a
/// querystring with a huge number of fields would otherwise allocate an
/// accumulator per distinct key.
///
/// Default values: blank values kept, lenient parsing, no field limit, `&`
/// as separator.
///
/// ```
/// use qs_parser::{Config, Value};
///
/// let config = Config::new().keep_blank_values(false);
/// let params = config.parse_str("a=&b=2").unwrap();
/// assert_eq!(params.len(), 1);
/// assert_eq!(params["b"], Value::from("2"));
///
/// let config = Config::new().max_fields(Some(2));
/// assert!(config.parse_str("a=1&b=2&c=3").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) keep_blank_values: bool,
    pub(crate) strict: bool,
    pub(crate) max_fields: Option<usize>,
    pub(crate) separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            keep_blank_values: true,
            strict: false,
            max_fields: None,
            separator: '&',
        }
    }

    /// Whether `key=` fields are kept with an empty string value.
    /// Default is `true`; when `false` those fields are dropped entirely.
    pub const fn keep_blank_values(mut self, keep_blank_values: bool) -> Self {
        self.keep_blank_values = keep_blank_values;
        self
    }

    /// In strict mode, empty fields (`a=1&&b=2`) and fields without an `=`
    /// (`a=1&flag`) are reported as [`Error::BadField`] instead of being
    /// skipped or treated as blank.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Maximum number of fields, counted as one more than the number of
    /// separators in the input. `None` disables the check.
    pub const fn max_fields(mut self, max_fields: Option<usize>) -> Self {
        self.max_fields = max_fields;
        self
    }

    /// The character separating fields. Default is `&`.
    pub const fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Parses a querystring using this `Config`.
    pub fn parse_str(&self, input: &str) -> Result<Params> {
        if input.is_empty() {
            return Ok(Params::default());
        }
        self.check(input)?;
        Ok(parse::parse_with(input, self))
    }

    /// Validates the raw input against the limits and strictness of this
    /// config. Tokenization itself cannot fail once this passes.
    fn check(&self, input: &str) -> Result<()> {
        if let Some(max) = self.max_fields {
            let count = 1 + input.matches(self.separator).count();
            if count > max {
                tracing::warn!(count, max, "querystring rejected: too many fields");
                return Err(Error::TooManyFields { count, max });
            }
        }

        if self.strict {
            if let Some(field) = input
                .split(self.separator)
                .find(|field| field.is_empty() || !field.contains('='))
            {
                tracing::warn!(field, "querystring rejected: bad field");
                return Err(Error::bad_field(field));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::error::Error;

    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_skips_checks() {
        let config = Config::new().strict(true).max_fields(Some(0));
        assert!(config.parse_str("").unwrap().is_empty());
    }

    #[test]
    fn max_fields_counts_separators() {
        let config = Config::new().max_fields(Some(3));
        assert!(config.parse_str("a=1&b=2&c=3").is_ok());
        assert_eq!(
            config.parse_str("a=1&b=2&c=3&").unwrap_err(),
            Error::TooManyFields { count: 4, max: 3 }
        );
    }

    #[test]
    fn strict_rejects_missing_equals() {
        let config = Config::new().strict(true);
        assert_eq!(
            config.parse_str("a=1&flag").unwrap_err(),
            Error::BadField("flag".to_string())
        );
    }

    #[test]
    fn strict_rejects_empty_field() {
        let config = Config::new().strict(true);
        assert_eq!(
            config.parse_str("a=1&&b=2").unwrap_err(),
            Error::BadField(String::new())
        );
        assert!(config.parse_str("a=1&b=").is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::bad_field("flag").to_string(),
            "bad query field: `flag`"
        );
        assert_eq!(
            Error::TooManyFields { count: 4, max: 3 }.to_string(),
            "max number of fields exceeded: found 4, limit is 3"
        );
    }
}
