//! Skill taxonomy: static per-role reference data used by the local gap classifier.
//!
//! Loaded once at startup (built-in table, or a JSON file via `SKILL_TAXONOMY_PATH`)
//! and shared read-only behind an `Arc` for the lifetime of the process.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Role used whenever the requested role is not in the taxonomy.
pub const DEFAULT_ROLE: &str = "Full Stack Developer";

/// A named group of interchangeable skills. Any one of them appearing in a
/// resume counts as coverage for the whole category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Everything the classifier needs to know about one target role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleModel {
    pub role: String,
    pub categories: Vec<SkillCategory>,
    /// Skills reported individually when absent, regardless of category coverage.
    pub must_haves: Vec<String>,
}

impl RoleModel {
    /// A role with neither categories nor must-haves. Such a role never reports
    /// a gap; a category with no skills still reports its own label.
    pub fn is_empty(&self) -> bool {
        self.must_haves.is_empty() && self.categories.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    roles: Vec<RoleModel>,
}

/// Immutable role → categories mapping.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    roles: Vec<RoleModel>,
    default_index: usize,
}

impl SkillTaxonomy {
    /// Loads the taxonomy from `path` when given, otherwise the built-in table.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read skill taxonomy file '{path}'"))?;
                let taxonomy = Self::from_json_str(&raw)
                    .with_context(|| format!("Invalid skill taxonomy file '{path}'"))?;
                info!("Loaded skill taxonomy from {path} ({} roles)", taxonomy.roles.len());
                Ok(taxonomy)
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Parses `{"roles": [{"role", "categories": [{"name", "skills"}], "must_haves"}]}`.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: TaxonomyFile = serde_json::from_str(raw)?;
        Self::from_roles(file.roles)
    }

    fn from_roles(roles: Vec<RoleModel>) -> Result<Self> {
        let default_index = roles
            .iter()
            .position(|r| r.role == DEFAULT_ROLE)
            .with_context(|| format!("Taxonomy must define the default role '{DEFAULT_ROLE}'"))?;
        for model in roles.iter().filter(|r| r.is_empty()) {
            warn!("Role '{}' has no skills; it can never report a gap", model.role);
        }
        Ok(Self {
            roles,
            default_index,
        })
    }

    /// Returns the model for `role`: exact match, then case-insensitive, then the default role.
    pub fn resolve(&self, role: &str) -> &RoleModel {
        self.find(role).unwrap_or(&self.roles[self.default_index])
    }

    /// Looks up a role without falling back.
    pub fn find(&self, role: &str) -> Option<&RoleModel> {
        let role = role.trim();
        self.roles
            .iter()
            .find(|r| r.role == role)
            .or_else(|| self.roles.iter().find(|r| r.role.eq_ignore_ascii_case(role)))
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.role.as_str()).collect()
    }

    /// The table shipped with the service.
    pub fn builtin() -> Self {
        let roles = vec![
            role_model(
                "Full Stack Developer",
                &[
                    (
                        "Frontend",
                        &["HTML", "CSS", "JavaScript", "React", "Redux", "Tailwind", "Bootstrap", "Next.js"],
                    ),
                    (
                        "Backend",
                        &["Node.js", "Express", "Python", "Django", "Flask", "Java", "PHP"],
                    ),
                    (
                        "Database",
                        &["MongoDB", "SQL", "PostgreSQL", "MySQL", "Prisma", "Redis"],
                    ),
                    (
                        "DevOps",
                        &["Git", "GitHub", "Docker", "CI/CD", "Linux", "AWS", "Netlify", "Vercel"],
                    ),
                ],
                &["React", "Node.js", "SQL", "Git"],
            ),
            role_model(
                "Data Scientist",
                &[
                    ("Languages", &["Python", "R", "SQL", "Scala"]),
                    (
                        "ML_Libraries",
                        &["Scikit-learn", "Pandas", "NumPy", "TensorFlow", "PyTorch", "Keras"],
                    ),
                    ("Visualization", &["Tableau", "PowerBI", "Matplotlib", "Seaborn"]),
                ],
                &["Python", "Pandas", "Scikit-learn", "SQL"],
            ),
            role_model(
                "DevOps Engineer",
                &[
                    ("Cloud", &["AWS", "Azure", "GCP", "DigitalOcean"]),
                    ("Containers", &["Docker", "Kubernetes", "Containerd"]),
                    ("CI_CD", &["Jenkins", "GitHub Actions", "GitLab CI", "CircleCI"]),
                    ("Infrastructure", &["Terraform", "Ansible", "CloudFormation"]),
                ],
                &["Docker", "Kubernetes", "AWS", "Git"],
            ),
            role_model(
                "Mobile App Developer",
                &[
                    ("CrossPlatform", &["React Native", "Flutter", "Ionic"]),
                    ("Native", &["Swift", "Kotlin", "Java", "Objective-C"]),
                    ("Tools", &["Xcode", "Android Studio", "Firebase"]),
                ],
                &["React Native", "Flutter", "Mobile UI", "API"],
            ),
        ];

        Self {
            roles,
            default_index: 0,
        }
    }
}

fn role_model(role: &str, categories: &[(&str, &[&str])], must_haves: &[&str]) -> RoleModel {
    RoleModel {
        role: role.to_string(),
        categories: categories
            .iter()
            .map(|(name, skills)| SkillCategory {
                name: name.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect(),
        must_haves: must_haves.iter().map(|s| s.to_string()).collect(),
    }
}
