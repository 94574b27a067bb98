pub mod helpers;
pub mod pre_register;
pub mod register;

pub use pre_register::PreRegister;
pub use register::Register;

pub(crate) use pre_register::__client_accounts_pre_register;
pub(crate) use register::__client_accounts_register;
