use crate::category::category_for_page;
use crate::text::{contains_whole_word, normalize, starts_with_word};
use crate::types::{MatchPriority, ScoredResult};

use super::resolve::ActiveResult;

/// Ranks one displayed title against the normalized query.
///
/// The ladder deliberately demotes bare substring hits below every
/// whole-word tier: `corn` inside `corner` is the false positive the
/// external search keeps surfacing above real matches.
pub(crate) fn priority_for(title: &str, query: &str) -> MatchPriority {
	if title == query {
		return MatchPriority::ExactTitle;
	}
	if starts_with_word(title, query) {
		return MatchPriority::TitleStartsWith;
	}
	if contains_whole_word(title, query) {
		return MatchPriority::TitleContains;
	}
	// Covers the plain-substring case and the defensive default for
	// items the external search matched on text we cannot see.
	MatchPriority::DescriptionContains
}

/// Scores and categorizes every active result for the current query.
///
/// Scoring uses the row's displayed title, not the page's canonical one;
/// ordering later uses the canonical title so injected and host-produced
/// rows sort consistently.
pub(crate) fn score_results(actives: &[ActiveResult], query: &str) -> Vec<ScoredResult> {
	actives
		.iter()
		.map(|active| {
			let title = normalize(&active.display_title);
			ScoredResult {
				handle: active.handle,
				page_key: active.page.key.clone(),
				title: normalize(&active.page.title),
				priority: priority_for(&title, query),
				category: category_for_page(&active.page),
			}
		})
		.collect()
}
