//! Authentication: register, login, JWT.

mod handlers;
mod jwt;
mod password;
mod payload;

pub use handlers::{login, register};
pub use jwt::{create_jwt, verify_jwt, Claims, JwtIssuer};
pub use password::{compare_passwords, hash_password, Argon2Passwords, PasswordHashing};
pub use payload::{LoginPayload, LoginResponse, RegisterPayload};
