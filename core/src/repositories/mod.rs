pub mod store;
pub mod user;

pub use store::TokenStore;
pub use user::UserRepository;

#[cfg(test)]
pub use store::MockTokenStore;
#[cfg(test)]
pub use user::MockUserRepository;
