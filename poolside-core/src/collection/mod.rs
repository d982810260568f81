//! The collection view engine: one generic filter/sort/paginate pipeline
//! shared by every list screen, keyed by field and dimension enums instead
//! of being re-implemented per entity.
//!
//! Data flows loader → [`filter`] → [`sort`] → [`paginate`]; [`view`]
//! composes the three stages behind a single call, and [`session`] scopes
//! the ephemeral state to one view activation.

pub mod filter;
pub mod item;
pub mod paginate;
pub mod session;
pub mod sort;
pub mod text;
pub mod view;

pub use filter::{CategoryDimension, CategorySelection, FilterState, matches};
pub use item::ViewItem;
pub use paginate::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES, Page, PageState, page_count,
    paginate,
};
pub use session::{LoadTicket, ViewSession};
pub use sort::{SortField, SortOrder, SortState, SortValue, compare, sort_items};
pub use view::{ViewPage, ViewState, view};
