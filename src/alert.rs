//! Transient alerts for success and error feedback.
//!
//! Alerts are rendered as fragments swapped into the fixed `#alert-container`
//! element of the base layout, either as the whole response body (error
//! responses routed there by `hx-target-error`) or as an out-of-band swap
//! alongside regular page content.

use maud::{Markup, html};

/// Alert message types for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A transient alert message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertView {
    kind: AlertKind,
    message: String,
    details: String,
}

impl AlertView {
    /// Create a new success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as a response body fragment.
    pub fn into_markup(self) -> Markup {
        let (container_style, text_style) = match self.kind {
            AlertKind::Success => (
                "rounded border border-green-300 bg-green-50 px-4 py-3 shadow \
                dark:border-green-700 dark:bg-green-900",
                "text-green-800 dark:text-green-200",
            ),
            AlertKind::Error => (
                "rounded border border-red-300 bg-red-50 px-4 py-3 shadow \
                dark:border-red-700 dark:bg-red-900",
                "text-red-800 dark:text-red-200",
            ),
        };

        html! {
            div class=(container_style) data-alert="true"
            {
                p class=(format!("font-semibold {text_style}")) { (self.message) }

                @if !self.details.is_empty() {
                    p class=(format!("text-sm {text_style}")) { (self.details) }
                }
            }
        }
    }

    /// Render the alert wrapped for an out-of-band swap into the alert
    /// container, for responses whose main body targets something else.
    pub fn into_oob_markup(self) -> Markup {
        let alert = self.into_markup();

        html! {
            div id="alert-container" hx-swap-oob="innerHTML"
            {
                (alert)
            }
        }
    }
}
