pub mod config;
pub mod commitment;
pub mod name_record;

pub use config::*;
pub use commitment::*;
pub use name_record::*;
