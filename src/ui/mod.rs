pub mod common_nav;
pub mod help;
pub mod layout;
pub mod render;
pub mod style;
pub mod surface;
pub mod widget;

pub use style::{StyleProvider, Theme};
pub use surface::Surface;
pub use widget::MenuBarWidget;
