// src/models/mod.rs
pub mod price_path;
