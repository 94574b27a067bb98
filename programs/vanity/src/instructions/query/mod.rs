pub mod parameters;
pub mod register_price;
pub mod name_availability;
pub mod pre_register_hash;

pub use parameters::ReadConfig;
pub use register_price::GetRegisterPrice;
pub use name_availability::IsNameAvailable;
pub use pre_register_hash::GetPreRegisterHash;

pub(crate) use parameters::__client_accounts_read_config;
pub(crate) use register_price::__client_accounts_get_register_price;
pub(crate) use name_availability::__client_accounts_is_name_available;
pub(crate) use pre_register_hash::__client_accounts_get_pre_register_hash;
