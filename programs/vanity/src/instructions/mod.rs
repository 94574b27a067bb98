pub mod admin;
pub mod registrar;
pub mod query;

pub use admin::*;
pub use registrar::*;
pub use query::*;
