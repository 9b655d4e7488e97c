pub mod confirm_quit;
pub mod editor;
pub mod message;

pub use confirm_quit::ConfirmQuitScreen;
pub use editor::EditorScreen;
pub use message::MessageScreen;
