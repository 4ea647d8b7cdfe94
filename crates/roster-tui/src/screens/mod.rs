//! Screen state machines.
//!
//! Each screen owns its transient view state; records are fetched fresh on
//! every activation and dropped when the screen is torn down.

pub mod detail;
pub mod index;

/// Loading lifecycle shared by all screens.
///
/// A screen starts in `Loading` and transitions exactly once, to `Loaded`
/// on fetch success or `Failed` on fetch failure. Failures are an explicit
/// display state, never swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Fetch in flight; the view shows a full-screen blocking indicator.
    Loading,
    /// Fetch succeeded.
    Loaded(T),
    /// Fetch failed with a user-visible reason.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Whether the screen is still waiting for its data.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the loaded value, if any.
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
