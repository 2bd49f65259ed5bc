pub mod guards;
pub mod use_cases;

pub use guards::GuardError;
pub use use_cases::{
    login::{LoginError, LoginOutcome, LoginUseCase},
    logout::{LogoutError, LogoutOutcome, LogoutUseCase},
    register::{RegisterError, RegisterUseCase},
};
