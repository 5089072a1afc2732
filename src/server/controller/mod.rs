//! HTTP request handlers.
//!
//! Handlers decode path parameters and JSON bodies, call the matching service and
//! encode the result. Extractor rejections are converted into `AppError::BadRequest`
//! so malformed input always yields a 400 with the standard error body.

pub mod curriculum;
pub mod health;
pub mod reservation;
pub mod resource;

#[cfg(test)]
mod test;
