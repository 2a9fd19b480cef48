//! Bidirectional mapping between category names and numeric label codes.

use crate::error::IoError;

/// A closed vocabulary of category names with stable numeric codes.
///
/// The code for a name is its position in the construction order, as `f64`
/// so it can sit in the last slot of a feature row. The mapping is
/// bijective and fixed for the lifetime of the vocabulary; construct one at
/// load time and inject it wherever names must be resolved.
///
/// # Example
///
/// ```
/// use petal_io::LabelVocabulary;
///
/// let vocab = LabelVocabulary::new(["Iris-virginica", "Iris-setosa"]).unwrap();
/// assert_eq!(vocab.code_for("Iris-setosa"), Some(1.0));
/// assert_eq!(vocab.name_for(0.0), Some("Iris-virginica"));
/// ```
#[derive(Debug, Clone)]
pub struct LabelVocabulary {
    names: Vec<String>,
}

impl LabelVocabulary {
    /// Creates a vocabulary from an ordered set of names.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::EmptyVocabulary`] for an empty set and
    /// [`IoError::DuplicateLabel`] when a name repeats.
    pub fn new<I, S>(names: I) -> Result<Self, IoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(IoError::EmptyVocabulary);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(IoError::DuplicateLabel { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    /// Returns the numeric code for `name`, if it is in the vocabulary.
    pub fn code_for(&self, name: &str) -> Option<f64> {
        self.names.iter().position(|n| n == name).map(|i| i as f64)
    }

    /// Returns the name for `code`, if it is an exact code in range.
    pub fn name_for(&self, code: f64) -> Option<&str> {
        if code.fract() != 0.0 || code < 0.0 || code >= self.names.len() as f64 {
            return None;
        }
        Some(self.names[code as usize].as_str())
    }

    /// Returns the category names in code order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the vocabulary has no categories.
    ///
    /// Construction forbids this, so it only holds for a `Default`-like
    /// state that this type does not offer; kept for clippy's len/is_empty
    /// pairing convention.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
