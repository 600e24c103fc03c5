//! Unit and integration tests for the cache module

mod redis_client_tests;
