//! Class registry.
//!
//! Collects the ordered list of class names for a labeling session. The
//! sentinel "unusable" class is always appended last, every name is stored
//! lowercase, and membership checks are case-insensitive.

use crate::error::ClassprepError;
use crate::operator::OperatorInput;

/// The always-present class for images that cannot be used.
pub const SENTINEL_CLASS: &str = "not_usable";

/// An ordered, non-empty list of class names; sentinel always last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    /// Build a class list from operator-supplied names.
    ///
    /// Names are lowercased and the sentinel is appended. A supplied name
    /// equal to the sentinel is not deduplicated; operators are expected not
    /// to claim it.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .collect();
        names.push(SENTINEL_CLASS.to_string());
        Self { names }
    }

    /// Prompt the operator for a class count and one name per class.
    ///
    /// An unparseable count aborts the registry; the caller must not proceed
    /// into labeling without a usable class list.
    pub fn from_operator(input: &mut dyn OperatorInput) -> Result<Self, ClassprepError> {
        let count_line = input.read_line("Enter the number of classes: ")?;
        let count: usize = count_line.trim().parse().map_err(|_| {
            ClassprepError::ClassRegistryAborted {
                message: format!("'{}' is not a valid class count", count_line.trim()),
            }
        })?;

        let mut names = Vec::with_capacity(count);
        for i in 0..count {
            let name = input.read_line(&format!("Enter the name of class {}: ", i + 1))?;
            names.push(name);
        }

        Ok(Self::from_names(names))
    }

    /// All class names in order, sentinel last.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of classes, sentinel included. Always at least one.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Look up a class by its 1-based menu index.
    pub fn get(&self, one_based: usize) -> Option<&str> {
        if one_based == 0 {
            return None;
        }
        self.names.get(one_based - 1).map(String::as_str)
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// The 1-based class menu shown before each selection prompt.
    pub fn menu(&self) -> String {
        let mut out = String::new();
        for (idx, name) in self.names.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", idx + 1, name));
        }
        out
    }
}
