//! PHP-style querystring parsing
//!
//! Querystrings are not formally defined, but many servers accept bracket
//! suffixes on keys to build lists and associative maps, in the style of
//! PHP's `$_GET`:
//!
//! - `sort[]=price&sort[]=-created` pushes onto a list,
//! - `a[5]=x` stores at an explicit position,
//! - `price[min]=100&price[max]=200` builds an associative map.
//!
//! This crate parses such a querystring into an ordered map from base key
//! to a [`Value`]: a single string, a list of strings, or an ordered
//! associative map. All three index styles may be mixed under the same key,
//! in which case they are merged into one structure.
//!
//! Only the last bracket pair of a key is interpreted, so nesting is a
//! single level deep: `a[b][c]=1` has base key `a[b]`. Values are always
//! strings; no type coercion is applied.
//!
//! ## Usage
//!
//! ```
//! use qs_parser::Value;
//!
//! let params = qs_parser::parse(
//!     "page=1&price[min]=100&price[max]=200&sort[]=price&sort[]=-created",
//! );
//!
//! assert_eq!(params["page"], Value::from("1"));
//! assert_eq!(
//!     params["price"],
//!     [("min", "100"), ("max", "200")].into_iter().collect::<Value>()
//! );
//! assert_eq!(params["sort"], Value::from(vec!["price", "-created"]));
//! ```
//!
//! ## Merging
//!
//! A key seen once without an index stays a plain string. A second value of
//! any kind turns it into a list, and the first named index turns it into a
//! map keyed by each value's position:
//!
//! ```
//! let params = qs_parser::parse("a=1&b=2&b[]=3&b[other]=4");
//!
//! assert_eq!(params["a"].as_str(), Some("1"));
//! assert_eq!(
//!     params["b"],
//!     [("0", "2"), ("1", "3"), ("other", "4")]
//!         .into_iter()
//!         .collect::<qs_parser::Value>()
//! );
//! ```
//!
//! Use [`Config`] to change how the raw string is tokenized, for example
//! to limit the number of fields accepted from untrusted input.

mod config;
mod error;
mod parse;
mod value;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use parse::key::{IndexKind, KeyDetail};
#[doc(inline)]
pub use parse::param::{ParamAccumulator, Representation};
#[doc(inline)]
pub use parse::{ParamSet, Params, parse};
#[doc(inline)]
pub use value::Value;
