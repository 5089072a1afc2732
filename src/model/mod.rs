//! Wire types shared by request decoding and response encoding.

pub mod api;
pub mod curriculum;
pub mod discipline;
pub mod reservation;
pub mod resource;
