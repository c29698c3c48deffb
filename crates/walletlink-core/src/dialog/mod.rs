//! Dialog container and the connect wallet dialog built on it.

pub mod connect_dialog;
pub mod shell;

pub use connect_dialog::{CONNECT_DIALOG_TITLE, ConnectBody, ConnectDialog};
pub use shell::{CloseHandle, DialogFrame, DialogHeader, DialogProps, DialogShell};
