mod r#trait;

pub use r#trait::TokenStore;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockTokenStore;

#[cfg(test)]
mod tests;
