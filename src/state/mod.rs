//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models.
//! `auth` is the session identity; `navigation` carries the remembered
//! post-login destination.

pub mod auth;
pub mod navigation;
