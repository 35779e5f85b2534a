/**
 * Route Gate
 *
 * Declarative table deciding which paths need an authenticated identity.
 * Rules are path prefixes matched on whole segments (`/api/me` covers
 * `/api/me/favorites` but not `/api/menu`); the longest matching prefix
 * wins, and paths no rule covers get the gate's default access.
 */

/// Access level of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Served without a token
    Public,
    /// Needs a valid token for an existing user
    RequiresIdentity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GateRule {
    prefix: String,
    access: Access,
}

/// Prefix table consulted by the identity middleware on every request
#[derive(Debug, Clone)]
pub struct RouteGate {
    rules: Vec<GateRule>,
    default: Access,
}

impl RouteGate {
    /// Empty gate; every path gets `default`
    pub fn new(default: Access) -> Self {
        Self {
            rules: Vec::new(),
            default,
        }
    }

    /// The gate used by the server
    ///
    /// - `/api/auth` - public (register, login)
    /// - `/api/character` - public (character search)
    /// - `/api/me` - requires identity (favorites)
    pub fn standard() -> Self {
        Self::new(Access::Public)
            .public("/api/auth")
            .public("/api/character")
            .requires_identity("/api/me")
    }

    /// Mark a prefix as public
    pub fn public(self, prefix: impl Into<String>) -> Self {
        self.rule(prefix, Access::Public)
    }

    /// Mark a prefix as requiring identity
    pub fn requires_identity(self, prefix: impl Into<String>) -> Self {
        self.rule(prefix, Access::RequiresIdentity)
    }

    /// Add a rule; declaring the same prefix twice keeps the later access
    pub fn rule(mut self, prefix: impl Into<String>, access: Access) -> Self {
        let prefix = normalize(&prefix.into());

        match self.rules.iter_mut().find(|rule| rule.prefix == prefix) {
            Some(existing) => existing.access = access,
            None => self.rules.push(GateRule { prefix, access }),
        }

        self
    }

    /// Access required for a request path
    pub fn access_for(&self, path: &str) -> Access {
        self.rules
            .iter()
            .filter(|rule| covers(&rule.prefix, path))
            .max_by_key(|rule| rule.prefix.len())
            .map(|rule| rule.access)
            .unwrap_or(self.default)
    }
}

impl Default for RouteGate {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn covers(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return true;
    }

    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
