//! Mood submissions: validation, persistence, trend analysis, advice and
//! the pipeline gluing them to the recommenders.

pub mod advice;
pub mod handlers;
pub mod store;
pub mod submit;
pub mod trend;
pub mod validation;
