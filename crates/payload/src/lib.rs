//! Payload normalization core for a QR code generator front-end: validates
//! raw form field values per payload type and builds the single data string
//! handed to the external code renderer.

pub mod builder;
pub mod error;
pub mod models;
pub mod validate;

pub use builder::build;
pub use error::*;
pub use models::*;
pub use validate::validate;
