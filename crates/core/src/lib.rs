#![forbid(unsafe_code)]

pub mod access;
pub mod model;

pub use access::Allowlist;
