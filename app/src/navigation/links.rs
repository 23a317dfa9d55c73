/// One entry of the primary navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkItem {
    pub path: &'static str,
    pub label: &'static str,
    pub badge: Option<&'static str>,
}

/// Primary links, rendered in this order by both the desktop and mobile menus.
pub static NAV_LINKS: &[LinkItem] = &[
    LinkItem {
        path: "/stylists",
        label: "Find Stylists",
        badge: None,
    },
    LinkItem {
        path: "/dashboard",
        label: "My Wardrobe",
        badge: None,
    },
    LinkItem {
        path: "/recommendations",
        label: "AI Styling",
        badge: Some("Beta"),
    },
    LinkItem {
        path: "/documentation",
        label: "Documentation",
        badge: Some("New"),
    },
];

impl LinkItem {
    /// Whether this link represents `current_path`.
    ///
    /// Matches the exact path or any path below it, segment-wise, so
    /// `/stylists/42` activates `/stylists` but `/stylistsearch` does not.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active_path(self.path, current_path)
    }
}

pub fn is_active_path(link_path: &str, current_path: &str) -> bool {
    let current = match current_path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    if link_path == "/" {
        return current == "/";
    }
    current
        .strip_prefix(link_path)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn paths_are_unique() {
        let unique: BTreeSet<_> = NAV_LINKS.iter().map(|link| link.path).collect();
        assert_eq!(unique.len(), NAV_LINKS.len());
    }

    #[test]
    fn exact_and_nested_paths_are_active() {
        let stylists = NAV_LINKS[0];
        assert!(stylists.is_active("/stylists"));
        assert!(stylists.is_active("/stylists/"));
        assert!(stylists.is_active("/stylists/42/availability"));
    }

    #[test]
    fn sibling_prefixes_are_not_active() {
        let stylists = NAV_LINKS[0];
        assert!(!stylists.is_active("/stylistsearch"));
        assert!(!stylists.is_active("/"));
        assert!(!stylists.is_active("/dashboard"));
    }

    #[test]
    fn root_only_matches_itself() {
        assert!(is_active_path("/", "/"));
        assert!(is_active_path("/", ""));
        assert!(!is_active_path("/", "/documentation"));
    }

    #[test]
    fn badges_match_the_menu() {
        let badges: Vec<_> = NAV_LINKS.iter().filter_map(|link| link.badge).collect();
        assert_eq!(badges, ["Beta", "New"]);
    }
}
