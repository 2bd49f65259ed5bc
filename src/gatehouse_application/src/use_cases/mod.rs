pub mod login;
pub mod logout;
pub mod register;

pub use login::{LoginError, LoginOutcome, LoginUseCase};
pub use logout::{LogoutError, LogoutOutcome, LogoutUseCase};
pub use register::{RegisterError, RegisterUseCase};
