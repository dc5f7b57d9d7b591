// src/services/mod.rs

pub mod pagination;
pub mod quiz;
pub mod search;
