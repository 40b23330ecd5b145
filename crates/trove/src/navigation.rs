//! Navigation commands
//!
//! Every editing action ends by moving the interface somewhere. Instead of
//! mutating view state from inside a request callback, the client returns a
//! [`Navigation`] value and leaves the "how" to whichever frontend holds a
//! [`Navigator`].

/// Canonical listing view of the knowledge base. All editing actions land
/// here once the server has answered.
pub const KNOWLEDGE_BASE_PATH: &str = "/knowledge-base";

/// A request to move the interface to another view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    location: String,
}

impl Navigation {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Navigation to the knowledge-base listing view.
    pub fn to_knowledge_base() -> Self {
        Self::to(KNOWLEDGE_BASE_PATH)
    }

    /// Server-relative location, e.g. `/knowledge-base`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Absolute URL for this destination on the given server.
    pub fn resolve(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.location.trim_start_matches('/')
        )
    }
}

/// Destination sink for navigation commands.
///
/// Frontends decide what "going somewhere" means: the CLI prints the
/// resolved URL, tests record the visit.
pub trait Navigator {
    fn navigate(&self, nav: &Navigation);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_against_plain_base_url() {
        let nav = Navigation::to_knowledge_base();
        assert_eq!(
            nav.resolve("http://127.0.0.1:5000"),
            "http://127.0.0.1:5000/knowledge-base"
        );
    }

    #[test]
    fn resolves_against_trailing_slash_base_url() {
        let nav = Navigation::to_knowledge_base();
        assert_eq!(
            nav.resolve("http://kb.example.org/"),
            "http://kb.example.org/knowledge-base"
        );
    }

    #[test]
    fn listing_is_the_only_destination_editing_actions_use() {
        assert_eq!(Navigation::to_knowledge_base().location(), "/knowledge-base");
    }
}
