pub mod alphabet;
pub mod api;
pub mod cipher;
pub mod config;
pub mod corpus;
pub mod error;
pub mod eval;
pub mod languages;
pub mod model;
pub mod sampler;
// cmd and reports are binary modules (in main.rs), not part of the library.
