//! Success and error alerts that render into the page's alert container.
//!
//! Alerts are sent as out-of-band htmx swaps, so a handler can return one
//! alongside (or instead of) its normal response target and it will land in
//! the `#alert-container` element of the base document.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

const ALERT_SUCCESS_STYLE: &str = "flex items-start gap-3 w-full p-4 rounded-lg border \
    border-green-300 bg-green-50 text-green-800 shadow \
    dark:border-green-800 dark:bg-gray-800 dark:text-green-400";

const ALERT_ERROR_STYLE: &str = "flex items-start gap-3 w-full p-4 rounded-lg border \
    border-red-300 bg-red-50 text-red-800 shadow \
    dark:border-red-800 dark:bg-gray-800 dark:text-red-400";

/// A notification to display in the page's alert container.
pub enum Alert {
    /// A success message with extra details underneath.
    #[allow(dead_code)]
    Success { message: String, details: String },
    /// A success message on its own.
    SuccessSimple { message: String },
    /// An error message with extra details underneath.
    Error { message: String, details: String },
    /// An error message on its own.
    ErrorSimple { message: String },
}

impl Alert {
    /// Render the alert as an out-of-band swap targeting the alert container.
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => (ALERT_SUCCESS_STYLE, message, details),
            Alert::SuccessSimple { message } => (ALERT_SUCCESS_STYLE, message, String::new()),
            Alert::Error { message, details } => (ALERT_ERROR_STYLE, message, details),
            Alert::ErrorSimple { message } => (ALERT_ERROR_STYLE, message, String::new()),
        };

        html! {
            div hx-swap-oob="innerHTML:#alert-container"
            {
                div class=(style) role="alert"
                {
                    div class="flex-1"
                    {
                        p class="font-medium" { (message) }

                        @if !details.is_empty()
                        {
                            p class="text-sm" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        onclick="this.closest('[role=alert]').remove()"
                        class="font-bold"
                    {
                        "×"
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use super::Alert;

    fn paragraph_texts(alert: Alert) -> Vec<String> {
        let html = Html::parse_fragment(&alert.into_html().into_string());
        let paragraph = Selector::parse("p").unwrap();

        html.select(&paragraph)
            .map(|element| element.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[test]
    fn error_alert_renders_message_and_details() {
        let alert = Alert::Error {
            message: "Could not delete category".to_owned(),
            details: "Try refreshing the page.".to_owned(),
        };

        assert_eq!(
            paragraph_texts(alert),
            vec![
                "Could not delete category".to_owned(),
                "Try refreshing the page.".to_owned()
            ]
        );
    }

    #[test]
    fn simple_alert_renders_message_only() {
        let alert = Alert::SuccessSimple {
            message: "Category deleted".to_owned(),
        };

        assert_eq!(paragraph_texts(alert), vec!["Category deleted".to_owned()]);
    }

    #[test]
    fn alert_targets_alert_container() {
        let alert = Alert::ErrorSimple {
            message: "Something went wrong".to_owned(),
        };

        let html = alert.into_html().into_string();

        assert!(
            html.contains("hx-swap-oob=\"innerHTML:#alert-container\""),
            "alert should swap into the alert container, got: {html}"
        );
    }
}
