//! Authentication - token 签发/校验与应用凭据

mod credentials;
mod token;

pub use credentials::{AppCredentials, AUTH_RULES};
pub use token::{Claims, SigningError, TokenService, VerifyError};
