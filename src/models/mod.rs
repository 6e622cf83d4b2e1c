// src/models/mod.rs

pub mod discovery;
pub mod quiz;
