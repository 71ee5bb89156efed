//! Keyword filtering over an in-memory list of records.
//!
//! The filter is a case-insensitive substring match against every searchable
//! field of a record. A record matches when any one of its fields contains the
//! keyword. Matching records keep their original relative order.

/// Records that can be matched against a keyword.
pub trait Searchable {
    /// Text fields that take part in matching. Absent fields never match.
    fn search_fields(&self) -> impl Iterator<Item = Option<&str>>;
}

/// Trims surrounding whitespace and lower-cases the keyword.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Checks a record against an already normalized, non-empty keyword.
pub fn matches<T: Searchable>(item: &T, keyword: &str) -> bool {
    item.search_fields().any(|field| match field {
        Some(value) if !value.is_empty() => value.to_lowercase().contains(keyword),
        _ => false,
    })
}

/// Positions of the records matching the query, in ascending order.
pub fn matching_indices<T: Searchable>(items: &[T], query: &str) -> Vec<usize> {
    let keyword = normalize_query(query);
    if keyword.is_empty() {
        return (0..items.len()).collect();
    }

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(*item, &keyword))
        .map(|(i, _)| i)
        .collect()
}

/// Borrowed view of the records matching the query.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    matching_indices(items, query)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

/// What a renderer should show for the current search state.
#[derive(Debug, PartialEq)]
pub enum SearchDisplay<'a, T> {
    /// Records are not loaded yet, nothing else should be rendered.
    Loading,

    /// Loaded, but nothing to show (empty collection or no match).
    Empty,

    Results(Vec<&'a T>),
}

/// Search state: the latest records, the latest query and the derived view.
///
/// The view is recomputed eagerly whenever the records or the query change,
/// so reading it never does any work.
#[derive(Debug, Clone)]
pub struct Search<T> {
    query: String,
    items: Vec<T>,
    view: Vec<usize>,
    loading: bool,
}

impl<T: Searchable> Search<T> {
    /// Starts in the loading state with no records and an empty query.
    pub fn new() -> Self {
        Self {
            query: String::new(),
            items: Vec::new(),
            view: Vec::new(),
            loading: true,
        }
    }

    /// Starts already loaded with the given records.
    pub fn with_items(items: Vec<T>) -> Self {
        let mut search = Self::new();
        search.set_items(items);
        search
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when the normalized query filters anything.
    pub fn is_filtering(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute();
    }

    /// Replaces the records and marks the search as loaded.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.recompute();
    }

    /// Puts the search back into the loading state, e.g. while reloading.
    /// The previous records are kept until new ones arrive.
    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    pub fn view(&self) -> Vec<&T> {
        self.view.iter().map(|i| &self.items[*i]).collect()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    pub fn display(&self) -> SearchDisplay<'_, T> {
        if self.loading {
            return SearchDisplay::Loading;
        }
        if self.view.is_empty() {
            return SearchDisplay::Empty;
        }
        SearchDisplay::Results(self.view())
    }

    /// Consumes the search and returns the matching records.
    pub fn into_view(self) -> Vec<T> {
        let mut keep = self.view.iter().peekable();
        self.items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| keep.next_if_eq(&&i).map(|_| item))
            .collect()
    }

    fn recompute(&mut self) {
        self.view = matching_indices(&self.items, &self.query);
    }
}

impl<T: Searchable> Default for Search<T> {
    fn default() -> Self {
        Self::new()
    }
}
