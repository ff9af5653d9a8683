//! Transient notifications.
//!
//! Toasts are queued in the session by a handler and drained by the next
//! rendered page.

use serde::{Deserialize, Serialize};

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    /// CSS modifier class.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Default => "toast",
            Self::Destructive => "toast toast--destructive",
        }
    }
}

/// A notification with a title and an optional description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variant: ToastVariant,
}

impl Toast {
    /// A neutral notification.
    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    /// An error notification.
    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Destructive,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        self.variant.css_class()
    }
}
