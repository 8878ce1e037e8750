//! Personal info and skills
//!
//! Static, read-only content shown on the home and about pages. Never
//! mutated at runtime; loaded from the `[profile]` config section.

use serde::{Deserialize, Serialize};

/// Site owner details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub avatar_url: String,
    pub socials: Socials,
}

/// Social profile links shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jordan Avery".to_string(),
            title: "Full-Stack Developer & Cybersecurity Enthusiast".to_string(),
            bio: "I build responsive web applications end to end, from interface \
                  design to secure back-end services, with a particular interest in \
                  secure coding, cloud computing and IoT."
                .to_string(),
            email: "hello@example.com".to_string(),
            avatar_url: String::new(),
            socials: Socials::default(),
        }
    }
}

impl Default for Socials {
    fn default() -> Self {
        Self {
            github: "https://github.com/".to_string(),
            linkedin: "https://www.linkedin.com/".to_string(),
            twitter: "https://twitter.com/".to_string(),
        }
    }
}

impl Profile {
    /// First letter of each word of the name, used as the avatar fallback
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Title split into words for the staggered home-page heading
    pub fn title_words(&self) -> Vec<&str> {
        self.title.split_whitespace().collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Copyright line for the footer
    pub fn footer_line(&self, year: i32) -> String {
        format!("© {} {}. All Rights Reserved.", year, self.name)
    }
}

/// A skill bar on the about page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SkillRecord")]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, at most 100
    pub level: u8,
}

/// Skill as written in config; clamped on the way in
#[derive(Deserialize)]
struct SkillRecord {
    name: String,
    level: u8,
}

impl From<SkillRecord> for Skill {
    fn from(record: SkillRecord) -> Self {
        Skill::new(record.name, record.level)
    }
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: level.min(100),
        }
    }
}

/// Skill list shipped with the site
pub fn default_skills() -> Vec<Skill> {
    [
        ("Python", 95),
        ("Node.js", 90),
        ("HTML", 97),
        ("CSS", 75),
        ("Java Script", 88),
        ("Canva", 98),
        ("Framer Motion", 85),
        ("Sql", 80),
        ("UI/UX Design", 92),
        ("MongoDB", 75),
        ("Wordpress", 70),
        ("Designing", 80),
    ]
    .into_iter()
    .map(|(name, level)| Skill::new(name, level))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let profile = Profile {
            name: "Ada  King Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "AKL");
    }

    #[test]
    fn test_footer_line() {
        let profile = Profile::default();
        assert_eq!(
            profile.footer_line(2026),
            "© 2026 Jordan Avery. All Rights Reserved."
        );
    }

    #[test]
    fn test_skill_level_clamped() {
        assert_eq!(Skill::new("Rust", 140).level, 100);
        assert_eq!(default_skills().len(), 12);
    }

    #[test]
    fn test_deserialized_skill_level_clamped() {
        let skills: Vec<Skill> =
            serde_json::from_str(r#"[{"name": "Go", "level": 150}, {"name": "C", "level": 40}]"#)
                .unwrap();
        assert_eq!(skills, vec![Skill::new("Go", 100), Skill::new("C", 40)]);
    }

    #[test]
    fn test_partial_profile_uses_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"name": "Sam"}"#).unwrap();
        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.email, "hello@example.com");
        assert_eq!(profile.title_words().first(), Some(&"Full-Stack"));
    }
}
