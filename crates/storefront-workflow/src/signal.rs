//! UI effects emitted by workflows
//!
//! Toasts and navigation are rendered elsewhere; workflows only queue
//! signals, and the host drains them after each operation. Tests observe
//! them the same way.

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A queued UI effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiSignal {
    /// Show a transient notification
    Toast {
        kind: ToastKind,
        message: String,
    },
    /// Navigate to a route
    Navigate {
        to: String,
    },
}

impl UiSignal {
    /// Success toast constructor
    #[inline]
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    /// Error toast constructor
    #[inline]
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    /// Navigation constructor
    #[inline]
    #[must_use]
    pub fn navigate(to: impl Into<String>) -> Self {
        Self::Navigate { to: to.into() }
    }
}
