use std::mem;

use indexmap::IndexMap;

use crate::value::Value;

use super::key::IndexKind;

/// The values collected for a single base key so far.
///
/// Values start out as a bare scalar and are promoted to a positional
/// sequence, then to an associative list of pairs, as more indices arrive.
/// Sequences and associative lists are ordered pairs rather than maps, so
/// explicit numeric indices may leave gaps or repeat.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Representation {
    #[default]
    Empty,
    Scalar(String),
    Sequence(Vec<(usize, String)>),
    Associative(Vec<(String, String)>),
}

/// Accumulates every value inserted under one base key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamAccumulator {
    key: String,
    representation: Representation,
    /// The slot used by the next `None`/`Push` insertion.
    next_position: usize,
    /// Set on the first named index, never cleared.
    is_associative: bool,
    /// First entry of each key in the associative pairs.
    slots: IndexMap<String, usize>,
}

impl ParamAccumulator {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        ParamAccumulator {
            key: key.into(),
            representation: Representation::Empty,
            next_position: 0,
            is_associative: false,
            slots: IndexMap::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    pub fn next_position(&self) -> usize {
        self.next_position
    }

    pub fn is_associative(&self) -> bool {
        self.is_associative
    }

    /// Folds `value` into the accumulated values at `index`.
    ///
    /// `None` and `Push` both take the next sequential slot. A lone value
    /// stays a scalar until a second value arrives. Numeric indices are
    /// stored at their explicit position; a repeated numeric index adds a
    /// second entry. The first named index turns the values associative,
    /// keyed by position, and a repeated named index replaces its value in
    /// place.
    pub fn insert(&mut self, index: &IndexKind, value: String) {
        let current = mem::take(&mut self.representation);
        self.representation = match (current, index) {
            (Representation::Empty, IndexKind::None | IndexKind::Push) => {
                self.take_position();
                Representation::Scalar(value)
            }
            (Representation::Empty, IndexKind::Numeric(n)) => {
                self.bump_to(*n);
                Representation::Sequence(vec![(*n, value)])
            }
            (Representation::Empty, IndexKind::Named(name)) => {
                self.is_associative = true;
                let mut pairs = Vec::new();
                self.upsert(&mut pairs, name, value);
                Representation::Associative(pairs)
            }

            (Representation::Scalar(first), IndexKind::None | IndexKind::Push) => {
                let position = self.take_position();
                tracing::trace!(key = %self.key, "promoting scalar to sequence");
                Representation::Sequence(vec![(0, first), (position, value)])
            }
            (Representation::Scalar(first), IndexKind::Numeric(n)) => {
                self.next_position = self.next_position.max(1);
                self.bump_to(*n);
                tracing::trace!(key = %self.key, index = n, "promoting scalar to sequence");
                Representation::Sequence(vec![(0, first), (*n, value)])
            }
            (Representation::Scalar(first), IndexKind::Named(name)) => {
                self.is_associative = true;
                tracing::trace!(key = %self.key, index = %name, "promoting scalar to associative");
                let mut pairs = Vec::new();
                self.push_pair(&mut pairs, position_key(0), first);
                self.upsert(&mut pairs, name, value);
                Representation::Associative(pairs)
            }

            (Representation::Sequence(mut list), IndexKind::None | IndexKind::Push) => {
                list.push((self.take_position(), value));
                Representation::Sequence(list)
            }
            (Representation::Sequence(mut list), IndexKind::Numeric(n)) => {
                self.bump_to(*n);
                list.push((*n, value));
                Representation::Sequence(list)
            }
            (Representation::Sequence(list), IndexKind::Named(name)) => {
                self.is_associative = true;
                tracing::trace!(
                    key = %self.key,
                    index = %name,
                    entries = list.len(),
                    "promoting sequence to associative"
                );
                let mut pairs = Vec::with_capacity(list.len() + 1);
                for (position, existing) in list {
                    self.push_pair(&mut pairs, position_key(position), existing);
                }
                self.upsert(&mut pairs, name, value);
                Representation::Associative(pairs)
            }

            (Representation::Associative(mut pairs), IndexKind::None | IndexKind::Push) => {
                let position = self.take_position();
                self.push_pair(&mut pairs, position_key(position), value);
                Representation::Associative(pairs)
            }
            (Representation::Associative(mut pairs), IndexKind::Numeric(n)) => {
                self.bump_to(*n);
                self.push_pair(&mut pairs, position_key(*n), value);
                Representation::Associative(pairs)
            }
            (Representation::Associative(mut pairs), IndexKind::Named(name)) => {
                self.upsert(&mut pairs, name, value);
                Representation::Associative(pairs)
            }
        };
    }

    /// Renders the accumulated values. Does not modify the accumulator.
    ///
    /// # Panics
    ///
    /// Panics if nothing was ever inserted. Accumulators are only created
    /// together with their first value, so this indicates a wiring bug.
    pub fn finalize(&self) -> Value {
        match &self.representation {
            Representation::Empty => {
                panic!("internal error: parameter `{}` has no values", self.key)
            }
            Representation::Scalar(value) => Value::String(value.clone()),
            Representation::Sequence(list) => {
                debug_assert!(!self.is_associative);
                Value::Sequence(list.iter().map(|(_, value)| value.clone()).collect())
            }
            Representation::Associative(pairs) => Value::Map(pairs.clone()),
        }
    }

    /// Claims the next sequential slot. Once the slots run out at
    /// `usize::MAX`, the last slot is handed out again.
    fn take_position(&mut self) -> usize {
        let position = self.next_position;
        self.next_position = self.next_position.saturating_add(1);
        position
    }

    /// Makes sure sequential insertions continue after position `n`.
    fn bump_to(&mut self, n: usize) {
        self.next_position = self.next_position.max(n.saturating_add(1));
    }

    /// Appends a pair, recording where its key first appears.
    fn push_pair(&mut self, pairs: &mut Vec<(String, String)>, key: String, value: String) {
        if !self.slots.contains_key(&key) {
            self.slots.insert(key.clone(), pairs.len());
        }
        pairs.push((key, value));
    }

    /// Replaces the value of the first pair keyed `name`, or appends one.
    fn upsert(&mut self, pairs: &mut Vec<(String, String)>, name: &str, value: String) {
        match self.slots.get(name) {
            Some(&slot) => pairs[slot].1 = value,
            None => self.push_pair(pairs, name.to_owned(), value),
        }
    }
}

fn position_key(position: usize) -> String {
    itoa::Buffer::new().format(position).to_owned()
}
