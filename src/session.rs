// src/session.rs
//! Interaction state shared by the GUI and the CLI.
//!
//! Holds the loaded [`Dataset`] plus whatever the last user action produced.
//! Every derived view is rebuilt from scratch by the action that needs it;
//! nothing is patched in place.

use crate::{
    config::consts::PLACEHOLDER,
    dataset::{Dataset, FacilityTankRecord, OwnerRecord},
    filter::{self, Category, Mode},
    group::{self, FacilityGroup},
    maps, owner,
};

#[derive(Debug, Default)]
pub struct Session {
    dataset: Dataset,

    category: Option<Category>,
    search_term: String,
    selected_value: Option<String>,

    // derived from `category`
    unique_values: Vec<String>,

    // last query result, as row indices into `dataset.facilities`
    results: Vec<usize>,

    // single slots: a new value replaces the old one
    owner: Option<usize>,
    notice: Option<String>,
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, ..Self::default() }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /* ---------- category ---------- */

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn mode(&self) -> Option<Mode> {
        self.category.map(Category::mode)
    }

    /// Switch category. Results stay until the next search/selection.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.selected_value = None;
        self.unique_values = filter::unique_values(&self.dataset.facilities, category);
        logf!(
            "UI: Category → {:?} ({} dropdown values)",
            category.map(Category::key),
            self.unique_values.len()
        );
    }

    pub fn unique_values(&self) -> &[String] {
        &self.unique_values
    }

    /* ---------- free-text search ---------- */

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// For widgets that edit the term in place.
    pub fn search_term_mut(&mut self) -> &mut String {
        &mut self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Run the current term. Dropdown categories (or none) give no rows.
    pub fn search(&mut self) {
        self.results = match self.category {
            Some(c) if c.mode() == Mode::Search => {
                filter::filter_indices(&self.dataset.facilities, Some(c), &self.search_term)
            }
            _ => Vec::new(),
        };
        logf!(
            "Search: category={:?} term={:?} rows={}",
            self.category.map(Category::key),
            self.search_term,
            self.results.len()
        );
    }

    /* ---------- dropdown ---------- */

    pub fn selected_value(&self) -> Option<&str> {
        self.selected_value.as_deref()
    }

    /// Pick a dropdown entry; "" is the "--Select--" row and matches nothing.
    /// Search categories (or none) give no rows.
    pub fn select_value(&mut self, value: &str) {
        self.selected_value = (!value.is_empty()).then(|| s!(value));
        self.results = match self.category {
            Some(c) if c.mode() == Mode::Dropdown && !value.is_empty() => {
                filter::filter_indices(&self.dataset.facilities, Some(c), value)
            }
            _ => Vec::new(),
        };
        logf!(
            "Select: category={:?} value={:?} rows={}",
            self.category.map(Category::key),
            value,
            self.results.len()
        );
    }

    /* ---------- results ---------- */

    pub fn result_indices(&self) -> &[usize] {
        &self.results
    }

    pub fn results(&self) -> Vec<&FacilityTankRecord> {
        self.results
            .iter()
            .filter_map(|&ix| self.dataset.facilities.get(ix))
            .collect()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn groups(&self) -> Vec<FacilityGroup<'_>> {
        group::group_by_facility(self.results())
    }

    /// Shown instead of the results area while it is empty.
    pub fn placeholder(&self) -> &'static str {
        PLACEHOLDER
    }

    /* ---------- owner overlay ---------- */

    /// Resolve a tank's owner into the overlay slot. A tank without an owner
    /// name (absent or empty) resolves to nothing.
    pub fn show_owner(&mut self, name: Option<&str>) {
        self.owner = name
            .filter(|n| !n.is_empty())
            .and_then(|n| owner::owner_position(&self.dataset.owners, n));
        match self.owner {
            Some(_) => logd!("Owner: {:?} found", name),
            None => logd!("Owner: {:?} not found", name),
        }
    }

    pub fn close_owner(&mut self) {
        self.owner = None;
    }

    pub fn owner(&self) -> Option<&OwnerRecord> {
        self.owner.and_then(|ix| self.dataset.owners.get(ix))
    }

    /* ---------- map link / notice ---------- */

    /// Map link for a (latitude, longitude) pair, or `None` with the notice
    /// slot set.
    pub fn open_map(&mut self, latitude: Option<&str>, longitude: Option<&str>) -> Option<String> {
        match maps::map_url(latitude, longitude) {
            Ok(url) => {
                logf!("Map: {}", url);
                Some(url)
            }
            Err(e) => {
                logd!("Map: {}", e);
                self.notice = Some(e.to_string());
                None
            }
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
