// src/lattice/mod.rs
pub mod binomial;
