//! Client-side routing and authorization.
//!
//! ARCHITECTURE
//! ============
//! `pattern` parses and matches path patterns, `table` holds the ordered and
//! validated route entries, `guard` decides access for protected entries, and
//! `router` combines them into one navigation decision. Nothing here touches
//! the DOM, so the whole layer is testable without a browser.

pub mod guard;
pub mod page;
pub mod pattern;
pub mod router;
pub mod routes;
pub mod table;

pub use guard::{Access, AccessGuard};
pub use page::Page;
pub use pattern::{PathPattern, PatternError, RouteParams};
pub use router::{Navigation, Router, RouterConfig};
pub use routes::blog_routes;
pub use table::{RouteEntry, RouteMatch, RouteTable, RouteTableError};

/// Router shared with the UI through Leptos context.
pub type SharedRouter = std::sync::Arc<Router>;
