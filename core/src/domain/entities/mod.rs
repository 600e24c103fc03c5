//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{TokenPair, TokenPayload, TokenType};
pub use user::User;
