pub mod add_modal;
pub mod logs;
pub mod picker;
pub mod preview;

pub use add_modal::AddStyleModal;
pub use logs::ActivityLog;
pub use picker::StylePicker;
pub use preview::PreviewPanel;
