pub mod cookies;
pub mod jwt;
