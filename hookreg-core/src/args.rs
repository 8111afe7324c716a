//! Positional hook arguments.
//!
//! The host fixes the arity and meaning of each event's arguments; the
//! registry only carries them through to handlers in order.

use std::{fmt, ops::Index, slice};

/// A single positional argument value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Param {
    /// No value (the host passed null).
    #[default]
    Null,
    /// A boolean flag.
    Bool(bool),
    /// An integer id or count.
    Int(i64),
    /// Any textual value.
    Text(String),
}

impl Param {
    /// Whether this is [`Param::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Param::Null)
    }

    /// The integer value, if this is [`Param::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Param::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The text value, if this is [`Param::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Param::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Null => Ok(()),
            Param::Bool(true) => f.write_str("1"),
            Param::Bool(false) => Ok(()),
            Param::Int(v) => write!(f, "{v}"),
            Param::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Bool(v)
    }
}

impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::Int(v.into())
    }
}

impl From<u32> for Param {
    fn from(v: u32) -> Self {
        Param::Int(v.into())
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Int(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Text(v.to_owned())
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Text(v)
    }
}

impl From<&String> for Param {
    fn from(v: &String) -> Self {
        Param::Text(v.clone())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(v: Option<T>) -> Self {
        v.map_or(Param::Null, Into::into)
    }
}

/// The ordered argument list passed to every handler of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HookArgs(Vec<Param>);

impl HookArgs {
    /// An empty argument list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an argument.
    pub fn push(&mut self, param: impl Into<Param>) {
        self.0.push(param.into());
    }

    /// Append an argument (builder form).
    pub fn with(mut self, param: impl Into<Param>) -> Self {
        self.push(param);
        self
    }

    /// The argument at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Param> {
        self.0.get(index)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the arguments in order.
    pub fn iter(&self) -> slice::Iter<'_, Param> {
        self.0.iter()
    }
}

impl From<Vec<Param>> for HookArgs {
    fn from(params: Vec<Param>) -> Self {
        Self(params)
    }
}

impl<P: Into<Param>> FromIterator<P> for HookArgs {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Index<usize> for HookArgs {
    type Output = Param;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a HookArgs {
    type Item = &'a Param;
    type IntoIter = slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let args = HookArgs::new()
            .with(14)
            .with("record-1")
            .with(None::<i64>)
            .with(Some("hash"));

        assert_eq!(args.len(), 4);
        assert_eq!(args[0].as_int(), Some(14));
        assert_eq!(args[1].as_str(), Some("record-1"));
        assert!(args[2].is_null());
        assert_eq!(args.get(3), Some(&Param::Text("hash".into())));
        assert_eq!(args.get(4), None);
    }

    #[test]
    fn test_display_matches_host_stringification() {
        assert_eq!(Param::from(14).to_string(), "14");
        assert_eq!(Param::Null.to_string(), "");
        assert_eq!(Param::from(true).to_string(), "1");
        assert_eq!(Param::from(false).to_string(), "");
    }

    #[test]
    fn test_collect() {
        let args: HookArgs = ["a", "b"].into_iter().collect();
        let texts: Vec<_> = args.iter().filter_map(Param::as_str).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
