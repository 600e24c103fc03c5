//! Authentication orchestrator module
//!
//! Combines the token service with the user-lookup collaborator to
//! implement the refresh and logout flows, plus the access-token
//! authentication checks used at the request boundary.

mod service;


pub use service::AuthService;
