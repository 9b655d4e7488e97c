//! Menu bar and dropdown state machines.

pub mod bar;
pub mod dropdown;
pub mod entry;
pub mod layout;
pub mod nav;

pub use bar::{EntrySpan, MenuBar};
pub use dropdown::DropdownPanel;
pub use entry::{DropdownEntry, MenuEntry};
pub use layout::{compute_size, Size};
pub use nav::NavKey;
