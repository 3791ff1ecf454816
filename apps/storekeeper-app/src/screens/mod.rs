//! # Screens Module
//!
//! Screen actions the UI host calls. Each action returns what to show and
//! where to go; the host owns rendering and navigation.
//!
//! ## Screen Organization
//! ```text
//! screens/
//! ├── mod.rs   ◄─── You are here (Notice, Route, Outcome)
//! ├── list.rs  ◄─── Product list: load, delete
//! ├── add.rs   ◄─── Add product form
//! └── edit.rs  ◄─── Edit product form
//! ```
//!
//! ## How Actions Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Screen Action Flow                                   │
//! │                                                                         │
//! │  UI Host                                                               │
//! │  ───────                                                               │
//! │  const outcome = await addScreen.submit(db);                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust                                                                  │
//! │  ────                                                                  │
//! │  validate form ──► repository call ──► Outcome {                       │
//! │                                          notice: { kind, title, msg }, │
//! │                                          route: "productList" | null   │
//! │                                        }                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Host shows the notice, then navigates if a route is set               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod add;
pub mod edit;
pub mod list;

use serde::Serialize;
use ts_rs::TS;

use crate::error::ApiError;

pub use add::AddProductScreen;
pub use edit::EditProductScreen;
pub use list::{delete_product, load_products, ProductDto};

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-facing message (the host shows it as an alert or toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<ApiError> for Notice {
    fn from(err: ApiError) -> Self {
        Notice::error(err.message)
    }
}

/// Navigation the host should perform after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Route {
    /// Go to the product list.
    ProductList,
    /// Pop the current screen.
    Back,
}

/// Result of a screen action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Outcome {
    pub notice: Notice,
    pub route: Option<Route>,
}

impl Outcome {
    /// Show the notice and stay on the current screen.
    pub fn stay(notice: Notice) -> Self {
        Outcome { notice, route: None }
    }

    /// Show the notice, then navigate.
    pub fn navigate(notice: Notice, route: Route) -> Self {
        Outcome {
            notice,
            route: Some(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serialization() {
        let outcome = Outcome::navigate(Notice::success("Product added successfully!"), Route::ProductList);
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["notice"]["kind"], "success");
        assert_eq!(json["notice"]["title"], "Success");
        assert_eq!(json["route"], "productList");
    }

    #[test]
    fn test_api_error_becomes_error_notice() {
        let notice = Notice::from(ApiError::not_found("Product"));
        assert!(notice.is_error());
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "Product not found");
    }
}
