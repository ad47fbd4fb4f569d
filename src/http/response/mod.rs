//! Custom [response] types
//!
//! [response]: axum::response::IntoResponse

pub(crate) use self::{created::Created, location::Location};

mod created;
mod location;
