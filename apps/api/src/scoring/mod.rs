// Visa readiness scoring.
// Pure functions over a self-reported profile and the catalog's rule tables;
// handlers are the only part that touches application state.

pub mod advice;
pub mod bonus;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod rules;

pub use engine::UnknownCountryError;
