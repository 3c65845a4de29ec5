//! The extracted quotation record

/// One quotation extracted from a page
///
/// A `Quote` owns copies of its field values; nothing in it borrows from the
/// page it was extracted from. `tags` preserves document order and may be
/// empty, but is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quotation body
    pub text: String,

    /// The attributed author name
    pub author: String,

    /// Tag labels in document order (possibly empty)
    pub tags: Vec<String>,
}
