//! SerpentGuard: incident classification and triage for snakebite first
//! response.
//!
//! Ranked label/confidence output from an external image classifier goes in;
//! a conservative triage verdict (species or wound pattern, risk tier,
//! recommended action) comes out, and a summary of the incident is delivered
//! to a persistence endpoint or saved locally when the endpoint is down.

pub mod classifier;
pub mod config;
pub mod cycle;
pub mod incident;
pub mod triage;
