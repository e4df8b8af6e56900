use indexmap::IndexMap;

use crate::Config;
use crate::value::Value;

mod decode;
pub mod key;
pub mod param;
mod tokenize;

use key::{IndexKind, KeyDetail};
use param::ParamAccumulator;

/// The parsed querystring: base keys mapped to their values, in order of
/// first appearance.
pub type Params = IndexMap<String, Value>;

/// The accumulators for every base key seen so far.
///
/// A `ParamSet` is built fresh for each parse: values are routed to the
/// accumulator of their base key, which is created on first use, and the
/// whole set is rendered once all values are in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamSet {
    mapping: IndexMap<String, ParamAccumulator>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `base_key` at `index`.
    pub fn add(&mut self, base_key: &str, index: &IndexKind, value: String) {
        self.mapping
            .entry(base_key.to_owned())
            .or_insert_with(|| ParamAccumulator::new(base_key))
            .insert(index, value);
    }

    pub fn get(&self, base_key: &str) -> Option<&ParamAccumulator> {
        self.mapping.get(base_key)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Renders every accumulator in first-seen key order. The set is left
    /// untouched, so this can be called repeatedly.
    pub fn finalize(&self) -> Params {
        self.mapping
            .iter()
            .map(|(key, param)| (key.clone(), param.finalize()))
            .collect()
    }
}

/// Parses a querystring with the default [`Config`].
///
/// ```
/// use qs_parser::Value;
///
/// let params = qs_parser::parse("page=1&price[min]=100&sort[]=price&sort[]=-created");
/// assert_eq!(params["page"], Value::from("1"));
/// assert_eq!(params["price"].get("min"), Some("100"));
/// assert_eq!(params["sort"], Value::from(vec!["price", "-created"]));
/// ```
pub fn parse(input: &str) -> Params {
    if input.is_empty() {
        return Params::default();
    }
    parse_with(input, &Config::new())
}

/// Tokenizes and merges `input`. Any checks on `config` have already passed.
pub(crate) fn parse_with(input: &str, config: &Config) -> Params {
    let fields = tokenize::tokenize(input, config);
    tracing::debug!(fields = fields.len(), "tokenized querystring");

    let mut set = ParamSet::new();
    for (raw_key, values) in fields {
        let KeyDetail { base_key, index } = KeyDetail::extract(&raw_key);
        for value in values {
            set.add(&base_key, &index, value);
        }
    }

    let params = set.finalize();
    tracing::debug!(params = params.len(), "parsed querystring");
    params
}
