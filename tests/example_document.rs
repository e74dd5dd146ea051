use pretty_assertions::assert_eq;
use serde::Deserialize;

/// `ExampleDocument` is a test case for diffing: an old and a new HTML
/// document and the fragment expected when diffing them with the default
/// configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExampleDocument {
    name: String,
    old: String,
    new: String,
    expected: String,
}

impl ExampleDocument {
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub fn old_html(&self) -> &str { &self.old }

    #[must_use]
    pub fn new_html(&self) -> &str { &self.new }

    /// Asserts that the rendered diff matches the expected fragment.
    ///
    /// # Panics
    ///
    /// If the result does not match the expected fragment.
    pub fn assert_eq(&self, result: &str) {
        assert_eq!(result, self.expected, "example `{}`", self.name);
    }
}
