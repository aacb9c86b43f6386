pub mod token;

pub use token::{LoginProfile, TokenClaims, TokenSubject};
