//! infraquery answers natural-language questions about Azure infrastructure.
//!
//! A question flows through five stages:
//!
//! 1. [`analyzer`] asks a language model to turn it into a [`analyzer::QueryIntent`];
//! 2. [`resolver`] decides which resource groups to search;
//! 3. [`routing`] looks the resource up through the [`directory`] traits;
//! 4. [`synthesis`] asks the model to phrase the result, falling back to a
//!    plain-text rendering;
//! 5. [`pipeline`] ties them together and never fails to produce text.
//!
//! [`api`] and [`cli`] are the outer surfaces.

pub mod analyzer;
pub mod api;
pub mod cli;
pub mod config;
pub mod directory;
pub mod llm;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod prompts;
pub mod resolver;
pub mod routing;
pub mod synthesis;

#[cfg(test)]
mod testing;
