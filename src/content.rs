use serde::Serialize;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Tailwind gradient stops, e.g. `from-yellow-400 to-orange-500`
    pub color_gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tech_tags: &'static [&'static str],
    pub link: &'static str,
}

impl Project {
    pub fn image_src(&self) -> &'static str {
        if self.image_url.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.image_url
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon_class: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub avatar_url: &'static str,
    pub resume_url: &'static str,
    pub socials: &'static [SocialLink],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contact {
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_dial: &'static str,
    pub location: &'static str,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub creator: &'static str,
    pub og_type: &'static str,
}

/// In-page sections reachable from the navbar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Home,
    Skills,
    Projects,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [Anchor::Home, Anchor::Skills, Anchor::Projects, Anchor::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::Skills => "skills",
            Anchor::Projects => "projects",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::Skills => "Skills",
            Anchor::Projects => "Projects",
            Anchor::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("{}#{}", page_href("/"), self.id())
    }
}

/// Internal page links always end in `/` so they resolve to `<dir>/index.html`
/// on plain static hosting.
pub fn page_href(path: &str) -> String {
    let path = path.split(['#', '?']).next().unwrap_or_default();
    if path.is_empty() {
        "/".to_string()
    } else if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

pub const SITE: SiteMeta = SiteMeta {
    title: "Panupong Songsaksri - Portfolio",
    description:
        "Personal portfolio of Panupong Songsaksri - Web Developer & Frontend Enthusiast",
    keywords: &["web developer", "frontend", "react", "next.js", "portfolio"],
    author: "Panupong Songsaksri",
    creator: "Panupong Songsaksri",
    og_type: "website",
};

pub const PROFILE: Profile = Profile {
    name: "Panupong Songsaksri",
    initials: "PS",
    tagline: "Web Developer Node.js & Golang Backend Specialist",
    bio: "Web developer specializing in Node.js and Golang backends. I build scalable APIs and modern web apps with a focus on clean code, performance, and great user experience.",
    avatar_url: "https://pic.in.th/image/profile.X0dBFC",
    resume_url: "/resume.pdf",
    socials: &[
        SocialLink {
            label: "GitHub",
            url: "https://github.com/Be2Bag",
            icon_class: "devicon-github-plain",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/panupong-songsaksri-7811a02a3/",
            icon_class: "devicon-linkedin-plain",
        },
    ],
};

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "JavaScript",
        icon: "🔥",
        color_gradient: "from-yellow-400 to-orange-500",
    },
    Skill {
        name: "Golang",
        icon: "🐹",
        color_gradient: "from-sky-500 to-blue-700",
    },
    Skill {
        name: "MongoDB",
        icon: "🍃",
        color_gradient: "from-lime-500 to-emerald-700",
    },
    Skill {
        name: "PostgreSQL",
        icon: "🐘",
        color_gradient: "from-indigo-500 to-indigo-800",
    },
    Skill {
        name: "Redis",
        icon: "🧠",
        color_gradient: "from-red-500 to-rose-700",
    },
    Skill {
        name: "Docker",
        icon: "🐳",
        color_gradient: "from-cyan-400 to-blue-600",
    },
    Skill {
        name: "MySQL",
        icon: "🐬",
        color_gradient: "from-teal-400 to-blue-700",
    },
    Skill {
        name: "Git & GitHub",
        icon: "🐙",
        color_gradient: "from-orange-500 to-red-600",
    },
    Skill {
        name: "WebSockets",
        icon: "📡",
        color_gradient: "from-purple-400 to-fuchsia-600",
    },
    Skill {
        name: "Swagger",
        icon: "📘",
        color_gradient: "from-lime-400 to-green-600",
    },
    Skill {
        name: "GCP",
        icon: "☁️",
        color_gradient: "from-blue-400 to-yellow-400",
    },
    Skill {
        name: "Auth & Security",
        icon: "🔐",
        color_gradient: "from-yellow-500 to-rose-600",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "NCDs Prevention",
        description: "Preventing non-communicable diseases in the community by modifying risk groups for chronic diseases to return to normal health before progressing to illness.",
        image_url: "https://pic.in.th/image/ncd.X0dIHx?height=200&width=300",
        tech_tags: &["Vue.js", "Golang", "MongoDB"],
        link: "#",
    },
    Project {
        title: "MOPH KIOSK",
        description: "The service registration system via self-service kiosks manages service queues by department and sends notifications through the MOPH Station Line official account.",
        image_url: "https://pic.in.th/image/kiosk.X0TMXW?height=200&width=300",
        tech_tags: &["Vue.js", "Node.js", "MongoDB"],
        link: "#",
    },
    Project {
        title: "PCU Standard",
        description: "Information and Standards System for Primary Health Care Units",
        image_url: "https://pic.in.th/image/pcu.X0TZgz?height=200&width=300",
        tech_tags: &["Vue.js", "Node.js", "MongoDB"],
        link: "#",
    },
];

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Science in Information Technology",
    school: "Silpakorn University",
    summary: "Studied Information Technology with a focus on building scalable systems, backend development, and digital transformation. Developed practical skills through academic and real-world projects, emphasizing clean code, performance, and user experience.",
};

pub const CONTACT: Contact = Contact {
    email: "dev.be2bag@gmail.com",
    phone_display: "063 106 7421",
    phone_dial: "+1234567890",
    location: "Bangkok, Thailand",
};

pub fn copyright_line() -> String {
    format!(
        "© {} {}. All rights reserved.",
        env!("BUILD_YEAR"),
        PROFILE.name
    )
}

#[derive(Serialize)]
struct PersonLd<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    email: String,
    image: &'a str,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'a str>,
    #[serde(rename = "knowsAbout")]
    knows_about: Vec<&'a str>,
}

/// schema.org `Person` record embedded in the document head for indexers.
pub fn person_json_ld() -> String {
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: PROFILE.name,
        job_title: PROFILE.tagline,
        email: CONTACT.mailto(),
        image: PROFILE.avatar_url,
        same_as: PROFILE.socials.iter().map(|s| s.url).collect(),
        knows_about: SKILLS.iter().map(|s| s.name).collect(),
    };
    // plain string fields only, serialization can't fail
    serde_json::to_string(&person).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_skill_names_unique() {
        let names: HashSet<_> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SKILLS.len());
        assert_eq!(SKILLS.first().map(|s| s.name), Some("JavaScript"));
        assert_eq!(SKILLS.last().map(|s| s.name), Some("Auth & Security"));
    }

    #[test]
    fn test_project_titles_unique() {
        let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
        for project in PROJECTS {
            assert!(!project.tech_tags.is_empty(), "{} has no tags", project.title);
        }
    }

    #[test]
    fn test_project_image_fallback() {
        let mut project = PROJECTS[0];
        assert!(project.image_src().starts_with("https://pic.in.th/image/"));
        project.image_url = "";
        assert_eq!(project.image_src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_page_href_trailing_slash() {
        assert_eq!(page_href(""), "/");
        assert_eq!(page_href("/"), "/");
        assert_eq!(page_href("/resume"), "/resume/");
        assert_eq!(page_href("/resume/"), "/resume/");
        assert_eq!(page_href("/resume#top"), "/resume/");
    }

    #[test]
    fn test_anchor_hrefs() {
        let hrefs = Anchor::ALL.iter().map(|a| a.href()).collect::<Vec<_>>();
        assert_eq!(hrefs, vec!["/#home", "/#skills", "/#projects", "/#contact"]);
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(CONTACT.mailto(), "mailto:dev.be2bag@gmail.com");
        assert_eq!(CONTACT.tel(), "tel:+1234567890");
    }

    #[test]
    fn test_person_json_ld() {
        let json: serde_json::Value =
            serde_json::from_str(&person_json_ld()).expect("should be valid json");
        assert_eq!(json["@type"], "Person");
        assert_eq!(json["name"], PROFILE.name);
        assert_eq!(json["sameAs"].as_array().map(|a| a.len()), Some(2));
        assert_eq!(
            json["knowsAbout"].as_array().map(|a| a.len()),
            Some(SKILLS.len())
        );
    }

    #[test]
    fn test_copyright_mentions_owner() {
        let line = copyright_line();
        assert!(line.starts_with("© "));
        assert!(line.contains(PROFILE.name));
    }
}
