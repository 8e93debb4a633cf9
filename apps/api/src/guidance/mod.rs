//! Career guidance engines: recommendations, roadmap generation, live
//! consultation, and skills gap analysis.
//!
//! Every engine that talks to the model degrades to a deterministic fallback
//! on any failure, so pages always render content. Handlers here stay thin;
//! the engines own the behavior and the tests.

pub mod consultation;
pub mod gap;
pub mod handlers;
pub mod prompts;
pub mod recommendations;
pub mod roadmap;
