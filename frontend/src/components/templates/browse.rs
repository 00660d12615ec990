//! Pure state for the template browser: search, category filter, pagination
//! and the selection lifecycle. No framework types live here, so everything
//! is testable off the DOM.

use common::model::template::TemplateRecord;

/// Templates shown per page.
pub const PAGE_SIZE: usize = 40;

/// Maximum page-number buttons rendered at once.
pub const PAGE_WINDOW: usize = 7;

/// Sentinel category matching every template.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone)]
pub struct BrowserState {
    pub search_term: String,
    pub selected_category: String,
    pub current_page: usize,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            current_page: 1,
        }
    }
}

impl BrowserState {
    /// Stale pagination is never shown: every filter change lands on page 1.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.current_page = 1;
    }

    pub fn set_category(&mut self, category: String) {
        self.selected_category = category;
        self.current_page = 1;
    }

    /// No-op outside `[1, total_pages]`. The controls for those pages are
    /// disabled in the view; this is the backstop.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        if page >= 1 && page <= total_pages {
            self.current_page = page;
        }
    }

    /// Case-insensitive substring match on the name, inside the selected
    /// category. Recomputed on every render, never cached.
    pub fn filtered<'a>(&self, catalog: &'a [TemplateRecord]) -> Vec<&'a TemplateRecord> {
        let needle = self.search_term.to_lowercase();
        catalog
            .iter()
            .filter(|t| self.matches_category(t) && t.name.to_lowercase().contains(&needle))
            .collect()
    }

    fn matches_category(&self, template: &TemplateRecord) -> bool {
        self.selected_category == ALL_CATEGORIES || template.category == self.selected_category
    }

    /// The window of the filtered list shown for the current page.
    pub fn page_slice<'a, 'b>(&self, filtered: &'b [&'a TemplateRecord]) -> &'b [&'a TemplateRecord] {
        let start = (self.current_page - 1) * PAGE_SIZE;
        if start >= filtered.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(filtered.len());
        &filtered[start..end]
    }
}

pub fn total_pages(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE)
}

/// Distinct categories in catalog order, behind the `All` sentinel.
pub fn categories(catalog: &[TemplateRecord]) -> Vec<String> {
    let mut cats = vec![ALL_CATEGORIES.to_string()];
    for template in catalog {
        if !cats.iter().any(|c| c == &template.category) {
            cats.push(template.category.clone());
        }
    }
    cats
}

/// Page numbers to render: a sliding `PAGE_WINDOW`-entry window around the
/// current page, clamped at both ends of the page range.
pub fn page_numbers(current: usize, total: usize) -> Vec<usize> {
    if total <= PAGE_WINDOW {
        (1..=total).collect()
    } else if current <= 4 {
        (1..=PAGE_WINDOW).collect()
    } else if current >= total - 3 {
        (total - (PAGE_WINDOW - 1)..=total).collect()
    } else {
        (current - 3..=current + 3).collect()
    }
}

/// Pending selection and its confirmation modal. The two move together: a
/// grid click sets both, cancel clears both, confirm hands the record out by
/// value and closes the modal.
#[derive(Debug, Default)]
pub struct SelectionState {
    pub pending: Option<TemplateRecord>,
    pub modal_open: bool,
}

impl SelectionState {
    pub fn select(&mut self, template: TemplateRecord) {
        self.pending = Some(template);
        self.modal_open = true;
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.modal_open = false;
    }

    /// Returns the record to emit to the host, if any. Always closes.
    pub fn confirm(&mut self) -> Option<TemplateRecord> {
        self.modal_open = false;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: &str) -> TemplateRecord {
        TemplateRecord {
            name: name.to_string(),
            url: format!("/images/{}/{}.jpg", category.to_lowercase(), name.to_lowercase()),
            category: category.to_string(),
        }
    }

    fn cat_catalog() -> Vec<TemplateRecord> {
        vec![
            record("Cat Jam", "Animals"),
            record("Grumpy Cat", "Animals"),
            record("Dog Meme", "Animals"),
        ]
    }

    fn big_catalog(len: usize) -> Vec<TemplateRecord> {
        (0..len).map(|i| record(&format!("Template {}", i), "Memes")).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring_on_name_in_order() {
        let catalog = cat_catalog();
        let mut state = BrowserState::default();
        state.set_search_term("cat".to_string());
        let names: Vec<&str> = state.filtered(&catalog).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Cat Jam", "Grumpy Cat"]);
    }

    #[test]
    fn empty_search_yields_the_category_filtered_list() {
        let mut catalog = cat_catalog();
        catalog.push(record("Drake", "Classic"));
        let mut state = BrowserState::default();
        assert_eq!(state.filtered(&catalog).len(), 4);
        state.set_category("Classic".to_string());
        let names: Vec<&str> = state.filtered(&catalog).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Drake"]);
    }

    #[test]
    fn filter_changes_reset_the_page() {
        let catalog = big_catalog(90);
        let mut state = BrowserState::default();
        state.go_to_page(3, total_pages(state.filtered(&catalog).len()));
        assert_eq!(state.current_page, 3);
        state.set_search_term("Template".to_string());
        assert_eq!(state.current_page, 1);

        state.go_to_page(2, total_pages(state.filtered(&catalog).len()));
        state.set_category("Memes".to_string());
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn go_to_page_outside_range_has_no_effect() {
        let mut state = BrowserState::default();
        state.go_to_page(0, 3);
        assert_eq!(state.current_page, 1);
        state.go_to_page(4, 3);
        assert_eq!(state.current_page, 1);
        state.go_to_page(3, 3);
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn forty_five_templates_paginate_into_two_pages() {
        let catalog = big_catalog(45);
        let mut state = BrowserState::default();
        let filtered = state.filtered(&catalog);
        let pages = total_pages(filtered.len());
        assert_eq!(pages, 2);

        state.go_to_page(2, pages);
        let slice = state.page_slice(&filtered);
        assert_eq!(slice.len(), 5);
        assert_eq!(slice[0].name, "Template 40");
        assert_eq!(slice[4].name, "Template 44");

        // Next is disabled: page 3 is unreachable.
        state.go_to_page(3, pages);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn page_slice_is_empty_when_nothing_matches() {
        let catalog = cat_catalog();
        let mut state = BrowserState::default();
        state.set_search_term("zebra".to_string());
        let filtered = state.filtered(&catalog);
        assert!(filtered.is_empty());
        assert_eq!(total_pages(filtered.len()), 0);
        assert!(state.page_slice(&filtered).is_empty());
    }

    #[test]
    fn categories_are_distinct_in_order_behind_the_sentinel() {
        let catalog = vec![
            record("A", "Animals"),
            record("B", "Classic"),
            record("C", "Animals"),
        ];
        assert_eq!(categories(&catalog), vec!["All", "Animals", "Classic"]);
    }

    #[test]
    fn page_window_shows_all_pages_for_small_totals() {
        assert_eq!(page_numbers(1, 1), vec![1]);
        assert_eq!(page_numbers(3, 7), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn page_window_clamps_at_the_start() {
        assert_eq!(page_numbers(4, 20), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn page_window_clamps_at_the_end() {
        assert_eq!(page_numbers(17, 20), vec![14, 15, 16, 17, 18, 19, 20]);
        assert_eq!(page_numbers(20, 20), vec![14, 15, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn page_window_centers_in_the_middle() {
        assert_eq!(page_numbers(10, 20), vec![7, 8, 9, 10, 11, 12, 13]);
    }

    #[test]
    fn selecting_twice_is_idempotent() {
        let mut selection = SelectionState::default();
        let template = record("Grumpy Cat", "Animals");
        selection.select(template.clone());
        selection.select(template.clone());
        assert!(selection.modal_open);
        assert_eq!(selection.pending.as_ref(), Some(&template));
    }

    #[test]
    fn confirm_emits_the_shown_record_and_closes() {
        let mut selection = SelectionState::default();
        let template = record("Grumpy Cat", "Animals");
        selection.select(template.clone());
        let emitted = selection.confirm().unwrap();
        assert_eq!(emitted.url, template.url);
        assert!(!selection.modal_open);
        assert!(selection.pending.is_none());
        // A second confirm without a new click emits nothing.
        assert!(selection.confirm().is_none());
    }

    #[test]
    fn cancel_clears_both_fields_and_emits_nothing() {
        let mut selection = SelectionState::default();
        selection.select(record("Doge", "Animals"));
        selection.cancel();
        assert!(selection.pending.is_none());
        assert!(!selection.modal_open);
    }
}
