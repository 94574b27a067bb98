pub mod initialize;
pub mod set_lock_name_price;

pub use initialize::Initialize;
pub use set_lock_name_price::SetLockNamePrice;

pub(crate) use initialize::__client_accounts_initialize;
pub(crate) use set_lock_name_price::__client_accounts_set_lock_name_price;
