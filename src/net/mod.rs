//! Networking modules for the blog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema. The
//! routing core never calls into this module; pages do, then report the
//! outcome to the auth state.

pub mod api;
pub mod types;
