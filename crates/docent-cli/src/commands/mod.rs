//! Command implementations.
//!
//! Each command renders its output to a string; `main` prints it.

pub mod browse;
pub mod profile;
pub mod search;

pub use self::browse::{execute_categories, execute_outdated, execute_related, execute_show};
pub use self::profile::execute_profile;
pub use self::search::execute_search;
