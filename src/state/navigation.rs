//! Post-login destination remembered across a login redirect.
//!
//! Only written when return-to-origin is enabled in the router config.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingReturn {
    origin: Option<String>,
}

impl PendingReturn {
    /// Remember `origin`; a later redirect overwrites an earlier one.
    pub fn remember(&mut self, origin: String) {
        self.origin = Some(origin);
    }

    pub fn peek(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Consume the remembered origin.
    pub fn take(&mut self) -> Option<String> {
        self.origin.take()
    }
}
