pub mod dates;
pub mod error;
pub mod filter;
pub mod form;
pub mod model;
pub mod notify;
pub mod priority;
pub mod services;
pub mod sort;

pub use dates::{DateKind, DaysRemaining};
pub use error::ViewError;
pub use filter::filter_tasks;
pub use model::*;
pub use services::{reconcile, TaskRow, ViewSnapshot};
pub use sort::sort_tasks;
