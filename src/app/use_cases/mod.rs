//! Use-Cases der Application-Layer-Orchestrierung.

pub mod animation;
pub mod points;
pub mod viewport;
