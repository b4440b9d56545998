// src/feed/providers/mod.rs
pub mod file;
pub mod fixture;
pub mod http;
