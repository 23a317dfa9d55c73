//! Static tables rendered by the documentation page.

use icondata::Icon;

use crate::types::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    SystemDesign,
    Figma,
    PitchDeck,
}

impl ResourceKind {
    pub fn icon(self) -> Icon {
        match self {
            Self::SystemDesign => icondata::FiLayers,
            Self::Figma => icondata::FiFigma,
            Self::PitchDeck => icondata::FiMonitor,
        }
    }

    pub fn tile_class(self) -> &'static str {
        match self {
            Self::SystemDesign => "bg-gradient-to-br from-primary to-orange-500",
            Self::Figma => "bg-violet-500",
            Self::PitchDeck => "bg-sky-500",
        }
    }
}

/// A design or product artifact whose URL comes from the deployment config.
#[derive(Clone, Copy, Debug)]
pub struct ResourceLink {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub owner: &'static str,
    pub kind: ResourceKind,
    pub instructions: &'static str,
    pub example: &'static str,
}

impl ResourceLink {
    pub fn url<'a>(&self, site: &'a SiteConfig) -> Option<&'a str> {
        match self.kind {
            ResourceKind::SystemDesign => site.system_design_url.as_deref(),
            ResourceKind::Figma => site.figma_file_url.as_deref(),
            ResourceKind::PitchDeck => site.pitch_deck_url.as_deref(),
        }
    }
}

pub static RESOURCE_LINKS: &[ResourceLink] = &[
    ResourceLink {
        key: "system-design",
        title: "System Design (LLD + HLD)",
        description: "Service-by-service architecture for onboarding, wardrobe digitization, and AI recommendations.",
        owner: "Engineering",
        kind: ResourceKind::SystemDesign,
        instructions: "Set SYSTEM_DESIGN_URL in your .env file to expose the latest diagram.",
        example: "https://www.eraser.io/workspace/stylegenie-system-design",
    },
    ResourceLink {
        key: "figma",
        title: "Figma UI Kit & Prototype",
        description: "Visual design system, component specs, and prototype flows for stakeholder reviews.",
        owner: "Design",
        kind: ResourceKind::Figma,
        instructions: "Set FIGMA_FILE_URL so PMs can deep-dive into interaction details.",
        example: "https://www.figma.com/file/XXXXX/stylegenie?type=design",
    },
    ResourceLink {
        key: "pitch",
        title: "Pitch / Executive Deck",
        description: "External-facing deck summarizing vision, traction, and roadmap.",
        owner: "Leadership",
        kind: ResourceKind::PitchDeck,
        instructions: "Set PITCH_DECK_URL so the story stays in-sync with delivery.",
        example: "https://drive.google.com/file/d/stylegenie-pitch/view",
    },
];

const HERO_LINK_KEYS: [&str; 2] = ["system-design", "figma"];

/// Links promoted to buttons in the page hero.
pub fn hero_links() -> impl Iterator<Item = &'static ResourceLink> {
    RESOURCE_LINKS
        .iter()
        .filter(|link| HERO_LINK_KEYS.contains(&link.key))
}

#[derive(Clone, Copy, Debug)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub team: &'static str,
    pub email: &'static str,
    pub university: &'static str,
    pub subject: &'static str,
    pub skills: &'static [&'static str],
    pub responsibilities: &'static [&'static str],
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
}

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "EKRAMUL ISLAM SHADIK",
        role: "Backend Engineer | Team Lead",
        team: "Engineering",
        email: "shadik293@gmail.com",
        university: "University of Rajshahi",
        subject: "Information and Communication Engineering",
        skills: &["Django", "Redis", "Postgres"],
        responsibilities: &[
            "Builds backend APIs and manages deployments",
            "Integrates chat and payment systems",
        ],
        github: Some("https://github.com/shadikhasan"),
        linkedin: Some("https://www.linkedin.com/in/shadikhasan/"),
    },
    TeamMember {
        name: "MD HASNAIN ALI",
        role: "ML Engineer",
        team: "Engineering",
        email: "mdhasnainali.01@gmail.com",
        university: "University of Rajshahi",
        subject: "Computer Science and Engineering",
        skills: &["Django", "Redis", "Postgres"],
        responsibilities: &[
            "Builds backend APIs and manages deployments",
            "Integrates chat and payment systems",
        ],
        github: Some("https://github.com/hasnain-ali"),
        linkedin: Some("https://www.linkedin.com/in/hasnain-ali/"),
    },
    TeamMember {
        name: "HM SAZZAD KADIR",
        role: "Frontend Engineer",
        team: "Engineering",
        email: "sazzad@example.com",
        university: "University of Rajshahi",
        subject: "Information and Communication Engineering",
        skills: &["Figma", "Prototyping", "UI/UX"],
        responsibilities: &["Designs the product UI", "Creates interactive flows"],
        github: None,
        linkedin: Some("https://linkedin.com/in/hm-sazzad-kadir"),
    },
    TeamMember {
        name: "MAIMOONA PRITY",
        role: "Product Designer",
        team: "Design",
        email: "maimoona@example.com",
        university: "Islamic University",
        subject: "Information and Communication Engineering",
        skills: &["Figma", "Prototyping", "UI/UX"],
        responsibilities: &["Designs the product UI", "Creates interactive flows"],
        github: None,
        linkedin: Some("https://linkedin.com/in/maimoona-prity"),
    },
];

/// Shared demo login for one role.
#[derive(Clone, Copy, Debug)]
pub struct Credential {
    pub key: &'static str,
    pub role: &'static str,
    pub environment: &'static str,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub notes: &'static str,
    pub instructions: Option<&'static str>,
}

pub static CREDENTIALS: &[Credential] = &[
    Credential {
        key: "client-staging",
        role: "Client / Normal User",
        environment: "Frontend",
        email: Some("testuser@gmail.com"),
        password: Some("Test@1234"),
        notes: "Use to walkthrough onboarding, wardrobe management, and AI recommendations.",
        instructions: None,
    },
    Credential {
        key: "stylist-staging",
        role: "Stylist",
        environment: "Frontend",
        email: Some("hasnain@gmail.com"),
        password: Some("has@1234"),
        notes: "Covers stylist availability, bookings, and payout flows.",
        instructions: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChecklistStatus {
    Done,
    InProgress,
    Pending,
}

impl ChecklistStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::InProgress => "In Progress",
            Self::Pending => "Pending",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Done => icondata::FiCheckCircle,
            Self::InProgress => icondata::FiClock,
            Self::Pending => icondata::FiAlertCircle,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Done => "bg-emerald-50 text-emerald-700 border-emerald-100",
            Self::InProgress => "bg-amber-50 text-amber-700 border-amber-100",
            Self::Pending => "bg-rose-50 text-rose-700 border-rose-100",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChecklistItem {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: ChecklistStatus,
}

pub static HANDOFF_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        key: "pitch-deck",
        title: "Create Pitch Deck",
        description: "Prepare and finalize a clear, concise presentation outlining your solution concept.",
        status: ChecklistStatus::Done,
    },
    ChecklistItem {
        key: "video-demo",
        title: "Create Video Demo",
        description: "Record and upload a YouTube video demonstrating your project and its core features.",
        status: ChecklistStatus::Done,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique<'a>(keys: impl Iterator<Item = &'a str>) -> bool {
        let mut seen = HashSet::new();
        keys.into_iter().all(|key| seen.insert(key))
    }

    #[test]
    fn table_keys_are_unique() {
        assert!(unique(RESOURCE_LINKS.iter().map(|link| link.key)));
        assert!(unique(CREDENTIALS.iter().map(|entry| entry.key)));
        assert!(unique(HANDOFF_CHECKLIST.iter().map(|item| item.key)));
    }

    #[test]
    fn hero_promotes_system_design_and_figma() {
        let keys: Vec<_> = hero_links().map(|link| link.key).collect();
        assert_eq!(keys, ["system-design", "figma"]);
    }

    #[test]
    fn link_urls_come_from_site_config() {
        let site = SiteConfig {
            figma_file_url: Some("https://figma.example/file".to_owned()),
            pitch_deck_url: None,
            ..SiteConfig::default()
        };
        let urls: Vec<_> = RESOURCE_LINKS.iter().map(|link| link.url(&site)).collect();
        assert_eq!(
            urls,
            [
                site.system_design_url.as_deref(),
                Some("https://figma.example/file"),
                None
            ]
        );
    }

    #[test]
    fn every_status_has_a_distinct_label() {
        let labels: HashSet<_> = [
            ChecklistStatus::Done,
            ChecklistStatus::InProgress,
            ChecklistStatus::Pending,
        ]
        .into_iter()
        .map(ChecklistStatus::label)
        .collect();
        assert_eq!(labels.len(), 3);
    }
}
