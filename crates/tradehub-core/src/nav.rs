//! Navigation seam.

use url::Url;

/// Full-page navigation.
///
/// Both the header's login action and the auth-error recovery replace the
/// current page rather than updating in-process state; injecting this seam
/// keeps them testable without a host environment.
pub trait Navigate: Send + Sync {
    /// Replace the current page with the given URL.
    fn replace(&self, url: &Url);
}
