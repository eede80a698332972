//! Static site content: navigation, skills, qualifications, projects and
//! social links.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "/" },
    NavItem { name: "Skills", href: "/skills" },
    NavItem { name: "Qualifications", href: "/qualifications" },
    NavItem { name: "Projects", href: "/projects" },
    NavItem { name: "Contact", href: "/contact" },
    NavItem { name: "Feedback", href: "/feedback" },
];

/// Icon drawn on a skill card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SkillIcon {
    Cog,
    Code,
    Terminal,
    Database,
    GitBranch,
    Container,
    Cloud,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub icon: SkillIcon,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React / Next.js", icon: SkillIcon::Cog },
    Skill { name: "Node.js", icon: SkillIcon::Code },
    Skill { name: "Express.js", icon: SkillIcon::Terminal },
    Skill { name: "MongoDB / PostgreSQL", icon: SkillIcon::Database },
    Skill { name: "Git", icon: SkillIcon::GitBranch },
    Skill { name: "Docker", icon: SkillIcon::Container },
    Skill { name: "AWS", icon: SkillIcon::Cloud },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Qualification {
    pub title: &'static str,
    pub year: &'static str,
    pub institution: &'static str,
}

pub const QUALIFICATIONS: &[Qualification] = &[
    Qualification {
        title: "Matric",
        year: "2015",
        institution: "City High School",
    },
    Qualification {
        title: "ICS",
        year: "2017",
        institution: "City Intermediate College",
    },
    Qualification {
        title: "Bachelor\u{2019}s in Computer Science",
        year: "2021",
        institution: "ABC University",
    },
];

/// Solid shown in a project's 3D preview.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PreviewShape {
    Box,
    Sphere,
    Cone,
}

impl PreviewShape {
    pub fn class(&self) -> &'static str {
        match self {
            PreviewShape::Box => "preview-box",
            PreviewShape::Sphere => "preview-sphere",
            PreviewShape::Cone => "preview-cone",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub preview: PreviewShape,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        name: "Project Alpha",
        description: "A cool web application using React and Node.",
        live_url: "#",
        github_url: "#",
        preview: PreviewShape::Box,
    },
    Project {
        id: 2,
        name: "Project Beta",
        description: "An innovative mobile app built with Flutter.",
        live_url: "#",
        github_url: "#",
        preview: PreviewShape::Sphere,
    },
    Project {
        id: 3,
        name: "Project Gamma",
        description: "Data visualization dashboard with D3.js.",
        live_url: "#",
        github_url: "#",
        preview: PreviewShape::Cone,
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SocialKind {
    Github,
    Linkedin,
    Twitter,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::Github,
        label: "GitHub",
        href: "https://github.com",
    },
    SocialLink {
        kind: SocialKind::Linkedin,
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
    SocialLink {
        kind: SocialKind::Twitter,
        label: "Twitter",
        href: "https://twitter.com",
    },
];

pub const OWNER_NAME: &str = "Your Name Here";
pub const TAGLINE: &str = "Creative Fullstack Developer \u{1F680}";
pub const BRAND: &str = "Portfolio";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_cover_every_page() {
        let hrefs: Vec<_> = NAV_ITEMS.iter().map(|i| i.href).collect();
        assert_eq!(
            hrefs,
            ["/", "/skills", "/qualifications", "/projects", "/contact", "/feedback"]
        );
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
