//! Teacher search filters and page envelopes.
//!
//! Filters are conjunctive (AND) except the trait filter, which matches when
//! any supplied trait is present (OR). Text filters are case-insensitive.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::teacher::Teacher;

/// Default page size when a request omits `limit`.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Filter set for [`searching teachers`](crate::domain::ports::TeacherQuery::search_teachers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Case-insensitive substring match on the primary domain.
    pub domain: Option<String>,
    /// Exact match on the teaching style.
    pub teaching_style: Option<String>,
    /// Matches either end of the difficulty range.
    pub difficulty_level: Option<String>,
    /// Matches teachers exhibiting any of these traits.
    pub traits: Vec<String>,
    /// Case-insensitive substring match across name, title, and domain.
    pub query: Option<String>,
}

impl SearchFilters {
    /// Whether a teacher satisfies every supplied filter.
    #[must_use]
    pub fn matches(&self, teacher: &Teacher) -> bool {
        if let Some(domain) = &self.domain {
            let haystack = teacher.specialization.primary_domain.to_lowercase();
            if !haystack.contains(&domain.to_lowercase()) {
                return false;
            }
        }
        if let Some(style) = &self.teaching_style {
            if teacher.personality.teaching_style != *style {
                return false;
            }
        }
        if let Some(level) = &self.difficulty_level {
            if teacher.specialization.min_difficulty != *level
                && teacher.specialization.max_difficulty != *level
            {
                return false;
            }
        }
        if !self.traits.is_empty()
            && !self
                .traits
                .iter()
                .any(|t| teacher.personality.primary_traits.contains(t))
        {
            return false;
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = teacher.name.to_lowercase().contains(&needle)
                || teacher.title.to_lowercase().contains(&needle)
                || teacher
                    .specialization
                    .primary_domain
                    .to_lowercase()
                    .contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Requested page of results. Values below one are clamped to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    /// Build a page request, applying defaults for absent values.
    #[must_use]
    pub fn new(page: Option<usize>, limit: Option<usize>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1),
        }
    }

    /// One-based page number.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Page size.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination descriptor returned alongside a page slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageInfo {
    /// Total number of matching records across all pages.
    pub total: usize,
    /// One-based page number served.
    pub page: usize,
    /// Page size used.
    pub limit: usize,
    /// `ceil(total / limit)`.
    pub total_pages: usize,
}

/// One page of teachers plus its pagination descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeacherPage {
    /// The page slice.
    pub teachers: Vec<Teacher>,
    /// Pagination descriptor.
    pub pagination: PageInfo,
}

/// Slice a filtered result set into the requested page.
#[must_use]
pub fn paginate(teachers: Vec<Teacher>, request: PageRequest) -> TeacherPage {
    let total = teachers.len();
    let limit = request.limit();
    let page = request.page();
    // Saturate so absurd page numbers yield an empty slice, never overflow.
    let slice = teachers
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .collect();
    TeacherPage {
        teachers: slice,
        pagination: PageInfo {
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        },
    }
}
