//! Page copy and link targets.
//!
//! Everything on the page is fixed at build time. Components iterate these
//! slices in declaration order and never sort or filter them.

use crate::icons::Glyph;

/// Brand name split for the two-tone wordmark ("Cyber" + accented "Fortify").
pub const BRAND_PRIMARY: &str = "Cyber";
pub const BRAND_ACCENT: &str = "Fortify";

/// Address behind the contact card's mailto link.
pub const CONTACT_EMAIL: &str = "cyberfortify.contact@gmail.com";

pub const COPYRIGHT: &str = "© 2025 CyberFortify — Security First";

/// In-page anchor ids. Every [`NavLink`] must point at one of these.
pub const ANCHOR_SERVICES: &str = "services";
pub const ANCHOR_DEVELOPMENT: &str = "development";
pub const ANCHOR_TRUST: &str = "trust";
pub const ANCHOR_CONTACT: &str = "contact";

/// All section ids rendered on the page, top to bottom.
pub const ANCHORS: &[&str] = &[
    ANCHOR_SERVICES,
    ANCHOR_DEVELOPMENT,
    ANCHOR_TRUST,
    ANCHOR_CONTACT,
];

/// A link in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Href including the leading `#`.
    pub href: &'static str,
}

impl NavLink {
    /// Anchor id without the leading `#`.
    #[cfg(test)]
    fn anchor(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Services",
        href: "#services",
    },
    NavLink {
        label: "Development",
        href: "#development",
    },
    NavLink {
        label: "Trust",
        href: "#trust",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

/// One offering in the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
}

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        glyph: Glyph::Globe,
        title: "Web Application Security",
        description: "Comprehensive testing of your web assets to identify and eliminate logic flaws and technical vulnerabilities before attackers can exploit them.",
        impact: "Zero exploit Surface",
    },
    ServiceEntry {
        glyph: Glyph::Terminal,
        title: "Vulnerability & Pentesting",
        description: "We simulate high-end real-world attacks using the same methods as advanced persistent threats to uncover hidden risks across your infrastructure.",
        impact: "Validated Resilience",
    },
    ServiceEntry {
        glyph: Glyph::Search,
        title: "Secure Code Review",
        description: "Our experts manually analyze your source code to detect subtle security flaws, poor implementation practices, and hardcoded secrets.",
        impact: "Clean Production Code",
    },
    ServiceEntry {
        glyph: Glyph::Lock,
        title: "Security Hardening",
        description: "Strengthening your existing servers, operating systems, and network configurations to build an impenetrable defense layer.",
        impact: "Optimized Defense Posture",
    },
];

/// Tile in the development feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureEntry {
    pub glyph: Glyph,
    pub title: &'static str,
    pub text: &'static str,
}

pub const FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        glyph: Glyph::Code,
        title: "Secure-by-Design",
        text: "Architecture built for safety from day one.",
    },
    FeatureEntry {
        glyph: Glyph::Database,
        title: "Data Protection",
        text: "Encryption and secure storage protocols.",
    },
    FeatureEntry {
        glyph: Glyph::Zap,
        title: "High Performance",
        text: "Optimized for speed without compromise.",
    },
    FeatureEntry {
        glyph: Glyph::Shield,
        title: "Compliance",
        text: "Meeting global security standards.",
    },
];

pub const DEVELOPMENT_BULLETS: &[&str] = &[
    "Remediation of legacy security flaws",
    "Advanced performance and stability optimization",
    "API security and integration hardening",
    "Infrastructure as code with automated security checks",
];

/// Column of the trust section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EthicsEntry {
    pub title: &'static str,
    pub text: &'static str,
}

pub const ETHICS: &[EthicsEntry] = &[
    EthicsEntry {
        title: "Ethical Hacking",
        text: "We operate with a strict hacker-mindset but always guided by high professional ethics. We find the weaknesses before the bad actors do.",
    },
    EthicsEntry {
        title: "Confidentiality First",
        text: "Your data and internal systems are handled with the highest level of privacy and strict non-disclosure agreements.",
    },
    EthicsEntry {
        title: "Responsible Disclosure",
        text: "Our methodology ensures vulnerabilities are disclosed privately to you, with detailed remediation steps and follow-up validation.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        value: "100+",
        label: "Threats Blocked",
    },
    HeroStat {
        value: "24/7",
        label: "Expert Monitoring",
    },
    HeroStat {
        value: "ZERO",
        label: "Client Breaches",
    },
];

/// Kind of line in the hero terminal transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalLine {
    Command(&'static str),
    Ok(&'static str),
    Warn(&'static str),
    Done(&'static str),
}

impl TerminalLine {
    pub fn css_class(&self) -> &'static str {
        match self {
            TerminalLine::Command(_) => "terminal-line",
            TerminalLine::Ok(_) => "terminal-output success",
            TerminalLine::Warn(_) => "terminal-output warning",
            TerminalLine::Done(_) => "terminal-output highlight",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            TerminalLine::Command(t)
            | TerminalLine::Ok(t)
            | TerminalLine::Warn(t)
            | TerminalLine::Done(t) => *t,
        }
    }
}

pub const TERMINAL_PROMPT: &str = "root@cyberfortify:~";

pub const TERMINAL_TRANSCRIPT: &[TerminalLine] = &[
    TerminalLine::Command("run vulnerability_scan --all-nodes"),
    TerminalLine::Ok("[OK] Scanning network topology..."),
    TerminalLine::Ok("[OK] Analyzing firewall rules..."),
    TerminalLine::Warn("[WARN] Detected outdated SSL certificate on port 443"),
    TerminalLine::Command("deploy hardening_patch_v2.1"),
    TerminalLine::Done("System secured. All endpoints verified."),
];

/// Outbound profile link in the footer. Always opens in a new context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub network: &'static str,
    pub glyph: Glyph,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        network: "Facebook",
        glyph: Glyph::Facebook,
        href: "https://www.facebook.com/share/17eCKjRWqM/",
    },
    SocialLink {
        network: "Instagram",
        glyph: Glyph::Instagram,
        href: "https://www.instagram.com/mohssineeddaboz?igsh=MTl1Y3YzNXVsaWIwYw==",
    },
];

/// `mailto:` href for [`CONTACT_EMAIL`].
pub fn contact_href() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_keep_declaration_order() {
        let titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Web Application Security",
                "Vulnerability & Pentesting",
                "Secure Code Review",
                "Security Hardening",
            ]
        );
    }

    #[test]
    fn every_nav_link_targets_a_section() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
            assert!(
                ANCHORS.contains(&link.anchor()),
                "{} has no matching section",
                link.href
            );
        }
    }

    #[test]
    fn fixed_cardinalities() {
        assert_eq!(NAV_LINKS.len(), 4);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(DEVELOPMENT_BULLETS.len(), 4);
        assert_eq!(ETHICS.len(), 3);
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(SOCIAL_LINKS.len(), 2);
    }

    #[test]
    fn contact_href_is_mailto() {
        assert_eq!(contact_href(), "mailto:cyberfortify.contact@gmail.com");
    }

    #[test]
    fn social_links_are_absolute_https() {
        for link in SOCIAL_LINKS {
            assert!(link.href.starts_with("https://"), "{}", link.network);
        }
    }
}
