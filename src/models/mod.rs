//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod post;
pub mod user;
pub mod validation;

pub use post::{PostContent, PostTitle};
pub use user::Username;
pub use validation::ValidationError;
