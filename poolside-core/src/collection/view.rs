//! Per-view state and the composed filter → sort → paginate pipeline.

use super::filter::{self, CategoryDimension, CategorySelection, FilterState};
use super::item::ViewItem;
use super::paginate::{self, PageState, page_count};
use super::sort::{self, SortField, SortState};

/// The ephemeral state of one list view.
///
/// Created with defaults when the view activates, dropped when it goes
/// away; nothing here is persisted. The mutators own the coupling rule:
/// any change to filtering, sorting or the page size jumps back to the
/// first page, while plain page navigation touches nothing else.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub filter: FilterState,
    pub sort: SortState,
    pub page: PageState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state with a screen-specific sort (the plans screen opens on
    /// newest-first, for example).
    pub fn sorted_by(sort: SortState) -> Self {
        ViewState {
            sort,
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page.index = 0;
    }

    pub fn select_category(
        &mut self,
        dimension: CategoryDimension,
        selection: CategorySelection,
    ) {
        self.filter.select(dimension, selection);
        self.page.index = 0;
    }

    /// Header-click sorting; see [`SortState::toggle`].
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        self.page.index = 0;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page.size = size.max(1);
        self.page.index = 0;
    }

    /// Plain page navigation; filter and sort state are untouched and the
    /// index is taken as-is (out-of-range renders as an empty page until
    /// [`ViewState::clamp_page`] runs).
    pub fn set_page_index(&mut self, index: usize) {
        self.page.index = index;
    }

    /// Re-clamp the page index after the filtered collection changed
    /// underneath the view (deletion, refresh).
    pub fn clamp_page(&mut self, filtered_len: usize) {
        let count = page_count(filtered_len, self.page.size);
        self.page.index = if count == 0 {
            0
        } else {
            self.page.index.min(count - 1)
        };
    }
}

/// What the presentation layer renders: one page of references into the
/// loaded collection, plus the totals its pagination controls need.
#[derive(Debug)]
pub struct ViewPage<'a, T> {
    pub items: Vec<&'a T>,
    pub page_count: usize,
    /// Length of the filtered (pre-pagination) collection.
    pub filtered_len: usize,
}

/// Run the full pipeline over a loaded collection.
///
/// Filters with [`filter::matches`], sorts with the stable comparator from
/// [`sort`], then slices the requested page. The input collection is
/// untouched; the result borrows from it.
pub fn view<'a, T: ViewItem>(items: &'a [T], state: &ViewState) -> ViewPage<'a, T> {
    let mut selected: Vec<&T> = items
        .iter()
        .filter(|item| filter::matches(*item, &state.filter))
        .collect();

    selected.sort_by(|a, b| sort::compare(*a, *b, &state.sort));

    let filtered_len = selected.len();
    let page = paginate::paginate(&selected, &state.page);

    ViewPage {
        page_count: page.page_count,
        items: page.items.to_vec(),
        filtered_len,
    }
}
