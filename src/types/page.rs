/// A canonical searchable entry owned by the host's page registry.
///
/// The engine only ever reads pages; it never creates, mutates, or
/// destroys one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
	/// Opaque, unique, stable identifier.
	pub key: String,
	/// Display title; may embed inline markup tags.
	pub title: String,
	/// Category labels supplied by the host, best first.
	pub category_hints: Vec<String>,
	/// Explicit suppression flag carried on the page itself.
	pub hidden: bool,
}

impl Page {
	#[must_use]
	pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			title: title.into(),
			category_hints: Vec::new(),
			hidden: false,
		}
	}

	/// Replace the category hints with a new collection.
	#[must_use]
	pub fn with_categories(mut self, hints: Vec<String>) -> Self {
		self.category_hints = hints;
		self
	}

	/// Mark the page as explicitly suppressed.
	#[must_use]
	pub fn with_hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}
}
