//! Reusable UI components shared by pages.
//!
//! ARCHITECTURE
//! ============
//! `route_outlet` is the bridge between the browser location and the routing
//! core; the rest are presentational building blocks.

pub mod layout;
pub mod loading;
pub mod post_card;
pub mod post_form;
pub mod route_outlet;
