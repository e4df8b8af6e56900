/// How a bracket suffix addresses a slot within a base key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// No brackets, e.g. `a`.
    None,
    /// Empty brackets, e.g. `a[]`: the next sequential slot.
    Push,
    /// An unsigned decimal index, e.g. `a[5]`.
    Numeric(usize),
    /// Any other bracket content, e.g. `a[first]`.
    Named(String),
}

/// A raw querystring key split into its base key and index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyDetail {
    pub base_key: String,
    pub index: IndexKind,
}

impl KeyDetail {
    pub fn new(base_key: impl Into<String>, index: IndexKind) -> Self {
        KeyDetail {
            base_key: base_key.into(),
            index,
        }
    }

    /// Splits a decoded key into base key and index.
    ///
    /// Only the final bracket pair is considered, so `a[b][c]` has base key
    /// `a[b]` and index `c`. Keys with unmatched or empty-based brackets are
    /// returned unchanged with [`IndexKind::None`].
    ///
    /// ```
    /// use qs_parser::{IndexKind, KeyDetail};
    ///
    /// assert_eq!(KeyDetail::extract("sort[]").index, IndexKind::Push);
    /// assert_eq!(KeyDetail::extract("a[5]").index, IndexKind::Numeric(5));
    /// assert_eq!(
    ///     KeyDetail::extract("price[min]"),
    ///     KeyDetail::new("price", IndexKind::Named("min".into()))
    /// );
    /// ```
    pub fn extract(raw_key: &str) -> Self {
        if let Some(base) = raw_key.strip_suffix("[]") {
            return KeyDetail::new(base, IndexKind::Push);
        }

        if let Some(rest) = raw_key.strip_suffix(']') {
            if let Some(open) = rest.rfind('[') {
                let (base, inner) = (&rest[..open], &rest[open + 1..]);
                if !base.is_empty() && !inner.is_empty() {
                    return KeyDetail::new(base, classify(inner));
                }
            }
        }

        KeyDetail::new(raw_key, IndexKind::None)
    }
}

fn classify(inner: &str) -> IndexKind {
    if inner.bytes().all(|b| b.is_ascii_digit()) {
        // too large for a usize, fall back to the named case
        if let Ok(n) = inner.parse::<usize>() {
            return IndexKind::Numeric(n);
        }
    }
    IndexKind::Named(inner.to_owned())
}
