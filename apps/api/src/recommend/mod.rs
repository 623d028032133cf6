//! Content recommendation: a song and a book per classified emotion.
//!
//! Both clients share the same degradation policy: recommendation is a
//! nice-to-have, so failures are logged and replaced with placeholders
//! instead of failing the request.

pub mod books;
pub mod spotify;
pub mod terms;
