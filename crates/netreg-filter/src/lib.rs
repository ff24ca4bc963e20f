//! Search, visibility and service filtering over networks registry records.
//!
//! Every predicate is passed in explicitly; nothing here holds global state.
//! [`NetworksView`] bundles a network list with the transient state a
//! listing UI keeps (search text, toggles, selected network).

pub mod query;
pub mod select;
pub mod view;

pub use query::{NetworkQuery, ServiceFilters};
pub use select::{select, supported_service_count};
pub use view::{NetworksView, ToggleControl, ToggleTarget, ViewState};
