//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (API calls, auth updates,
//! post-submit navigation) and delegates rendering details to `components`.
//! Pages never decide access; `RouteOutlet` only mounts them once allowed.

pub mod about;
pub mod create_post;
pub mod edit_post;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod post;
pub mod register;
pub mod reset_password;
