pub mod menu_data;
pub mod models;
pub mod service;

pub use models::{categories, filter_by_category, Category, MenuItem, NewMenuItem};
pub use service::{MenuError, MenuService};
