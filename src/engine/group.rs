use std::collections::BTreeMap;

use crate::types::{ItemHandle, MatchPriority, ScoredResult};

pub(crate) const EXACT_LABEL: &str = "Exact Matches";
pub(crate) const STARTS_WITH_LABEL: &str = "Starts With";

/// One header plus the rows rendered beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section {
	pub label: String,
	pub items: Vec<ItemHandle>,
}

/// The complete render order for one pass. Sections with no items are
/// never emitted, so every header has at least one row under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RenderPlan {
	pub sections: Vec<Section>,
}

impl RenderPlan {
	pub(crate) fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}
}

/// Partitions scored results into the final section order.
///
/// Exact and starts-with matches get their own sections, sorted
/// alphabetically by title. The two lowest tiers are combined and split
/// by category instead: categories sort alphabetically, and so do the
/// rows within each one, with no secondary ordering by priority.
pub(crate) fn build_plan(results: Vec<ScoredResult>) -> RenderPlan {
	let mut exact = Vec::new();
	let mut starts_with = Vec::new();
	let mut rest: BTreeMap<String, Vec<ScoredResult>> = BTreeMap::new();

	for result in results {
		match result.priority {
			MatchPriority::ExactTitle => exact.push(result),
			MatchPriority::TitleStartsWith => starts_with.push(result),
			MatchPriority::TitleContains | MatchPriority::DescriptionContains => {
				rest.entry(result.category.clone()).or_default().push(result);
			}
		}
	}

	let mut plan = RenderPlan::default();
	push_section(&mut plan, EXACT_LABEL, exact);
	push_section(&mut plan, STARTS_WITH_LABEL, starts_with);
	for (category, results) in rest {
		push_section(&mut plan, &category, results);
	}
	plan
}

fn push_section(plan: &mut RenderPlan, label: &str, mut results: Vec<ScoredResult>) {
	if results.is_empty() {
		return;
	}
	results.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.page_key.cmp(&b.page_key)));
	plan.sections.push(Section {
		label: label.to_string(),
		items: results.into_iter().map(|result| result.handle).collect(),
	});
}
