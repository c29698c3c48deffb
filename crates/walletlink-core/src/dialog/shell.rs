//! Controlled dialog container.
//!
//! The shell holds no state. The parent decides whether it is open and
//! supplies the close callback; the body can only ask to be dismissed by
//! calling that callback.

use std::sync::Arc;

use crate::connect::Icon;

/// Parent-supplied dismissal callback.
#[derive(Clone)]
pub struct CloseHandle(Arc<dyn Fn() + Send + Sync>);

impl CloseHandle {
    pub fn new(on_close: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(on_close))
    }

    /// Handle that ignores close requests.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn request_close(&self) {
        tracing::debug!(event = "core.dialog.close_requested");
        (self.0)();
    }
}

impl std::fmt::Debug for CloseHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CloseHandle(..)")
    }
}

/// Inputs controlled by the parent.
#[derive(Clone, Debug)]
pub struct DialogProps {
    pub is_open: bool,
    pub on_close: CloseHandle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogHeader {
    pub title: String,
    pub icon: Icon,
}

impl DialogHeader {
    pub fn new(title: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            icon,
        }
    }
}

/// What an open dialog displays.
#[derive(Debug)]
pub struct DialogFrame<B> {
    pub header: DialogHeader,
    pub body: B,
    pub on_close: CloseHandle,
}

pub struct DialogShell;

impl DialogShell {
    /// Produce the dialog frame while open, `None` otherwise.
    ///
    /// `body` is only built for an open dialog and receives the close handle.
    pub fn render<B>(
        props: &DialogProps,
        header: DialogHeader,
        body: impl FnOnce(&CloseHandle) -> B,
    ) -> Option<DialogFrame<B>> {
        if !props.is_open {
            return None;
        }
        Some(DialogFrame {
            header,
            body: body(&props.on_close),
            on_close: props.on_close.clone(),
        })
    }
}
