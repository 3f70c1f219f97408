//! Error handling for anitui.
//!
//! - **Error Categories**: classification used for the overlay title and logs
//! - **Domain Errors**: fetch, selection, and configuration failures
//! - **Unified Error Type**: [`AppError`] is what the controller stores in its error state
//!
//! | Category | Source |
//! |----------|--------|
//! | Network | transport failure, non-2xx status, undecodable body |
//! | Selection | unparsable or unknown rank in the ranking table |
//! | Configuration | missing client id, malformed base URL |

mod app_error;
mod category;
mod config;
mod network;
mod selection;

pub use app_error::AppError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use network::{ApiError, FetchTarget};
pub use selection::SelectionError;

pub type AppResult<T> = Result<T, AppError>;
