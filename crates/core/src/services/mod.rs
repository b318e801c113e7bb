mod view;

pub use view::{reconcile, TaskRow, ViewSnapshot};
