pub mod validation;
pub mod payment;
pub mod records;
pub mod registration;
#[cfg(test)]
pub mod test_accounts;

pub use validation::*;
pub use payment::*;
pub use records::*;
pub use registration::*;
