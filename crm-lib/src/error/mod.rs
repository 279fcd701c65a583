//! Error types

mod auth;
mod directory;
mod field;
mod settings;
mod validation;

pub use auth::*;
pub use directory::*;
pub use field::*;
pub use settings::*;
pub use validation::*;
