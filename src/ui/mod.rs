/// Window layout
///
/// Each submodule renders one region of the form window:
/// - Input sidebar (sidebar.rs)
/// - Live preview pane (preview.rs)
/// - Notification stack (toast.rs)

pub mod preview;
pub mod sidebar;
pub mod toast;
