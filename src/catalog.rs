//! Client-side catalog state: the single source of truth for categories,
//! the active category's folders, and the streaming-server status.
//!
//! [`CatalogStore`] is a synchronous single-writer state machine; all remote
//! work runs on background threads owned by [`CatalogTasks`] and resolves as
//! [`CatalogEvent`]s applied back on the UI thread. Stale responses are
//! rejected by ticket generation, not by cancellation.

mod events;
mod store;
mod tasks;

pub use self::events::CatalogEvent;
pub use self::store::{
    CatalogStore, CategoryView, FolderTicket, Notice, NoticeLevel, SelectTicket, ToggleTicket,
};
pub use self::tasks::CatalogTasks;
