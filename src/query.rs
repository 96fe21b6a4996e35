use std::cmp::Ordering;

use tracing::debug;

use crate::category::{categorize, CategoryMap, CATEGORY_TABLE};
use crate::course::Course;
use crate::similarity::similarity_score;

pub const DEFAULT_MIN_SCORE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    pub score: f64,
    pub course: &'a Course,
    // only set by keyword search
    pub matches: Option<usize>,
}

pub struct SearchEngine {
    courses: Vec<Course>,
}

impl SearchEngine {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Substring hits score 1.0, everything else gets the fuzzy ratio.
    /// Results under `min_score` are dropped, the rest come back best first
    /// with ties left in file order.
    pub fn search(&self, query: &str, min_score: f64) -> Vec<SearchResult<'_>> {
        let query_lower = query.to_lowercase();

        let mut results: Vec<SearchResult<'_>> = self
            .courses
            .iter()
            .filter_map(|course| {
                let score = if course.title.to_lowercase().contains(&query_lower) {
                    1.0
                } else {
                    similarity_score(query, &course.title)
                };
                (score >= min_score).then_some(SearchResult {
                    score,
                    course,
                    matches: None,
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        debug!(query, hits = results.len(), "search finished");
        results
    }

    /// Comma separated keywords. A course qualifies as soon as one keyword
    /// is in its title; more hits rank higher.
    pub fn search_by_keywords(&self, keywords: &str) -> Vec<SearchResult<'_>> {
        let keyword_list = parse_keywords(keywords);
        if keyword_list.is_empty() {
            return Vec::new();
        }
        let total = keyword_list.len();

        let mut results: Vec<SearchResult<'_>> = self
            .courses
            .iter()
            .filter_map(|course| {
                let title_lower = course.title.to_lowercase();
                let matches = keyword_list
                    .iter()
                    .filter(|kw| title_lower.contains(kw.as_str()))
                    .count();
                (matches > 0).then(|| SearchResult {
                    score: matches as f64 / total as f64,
                    course,
                    matches: Some(matches),
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.matches
                .cmp(&a.matches)
                .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
        });
        debug!(keywords = ?keyword_list, hits = results.len(), "keyword search finished");
        results
    }

    pub fn search_by_category(&self) -> CategoryMap<'_> {
        categorize(&self.courses, CATEGORY_TABLE)
    }

    /// Every course at full score, for listing.
    pub fn all_results(&self) -> Vec<SearchResult<'_>> {
        self.courses
            .iter()
            .map(|course| SearchResult {
                score: 1.0,
                course,
                matches: None,
            })
            .collect()
    }
}

// trimmed, lowercased, blanks and repeats dropped, first-seen order kept
fn parse_keywords(input: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in input.split(',') {
        let token = token.trim().to_lowercase();
        if !token.is_empty() && !keywords.contains(&token) {
            keywords.push(token);
        }
    }
    keywords
}
