//! Role catalog: the read-only set of role profiles every match is scored against.
//!
//! Loaded once at startup, either from the built-in table or from `CATALOG_PATH`.

pub mod builtin;
pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::skill::SkillSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleProfile {
    pub role_id: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    pub required_skills: SkillSet,
    #[serde(default)]
    pub preferred_skills: SkillSet,
    /// Onboarding interest labels this role appeals to.
    #[serde(default)]
    pub related_interests: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    roles: Vec<RoleProfile>,
}

impl Catalog {
    /// Builds a catalog, rejecting an empty role list or duplicate role ids.
    pub fn new(roles: Vec<RoleProfile>) -> Result<Self> {
        if roles.is_empty() {
            bail!("role catalog is empty");
        }
        let mut seen = HashSet::new();
        for role in &roles {
            if !seen.insert(role.role_id.as_str()) {
                bail!("duplicate role id '{}' in catalog", role.role_id);
            }
        }
        Ok(Self { roles })
    }

    pub fn builtin() -> Self {
        Self {
            roles: builtin::roles(),
        }
    }

    /// Loads an ordered JSON array of role profiles.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let roles: Vec<RoleProfile> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
        Self::new(roles)
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn get(&self, role_id: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.role_id == role_id)
    }

    pub fn require(&self, role_id: &str) -> Result<&RoleProfile, AppError> {
        self.get(role_id)
            .ok_or_else(|| AppError::UnknownRole(role_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Every required and preferred skill across the catalog, in declaration order.
    pub fn skill_vocabulary(&self) -> SkillSet {
        self.roles
            .iter()
            .flat_map(|r| r.required_skills.iter().chain(r.preferred_skills.iter()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn role(id: &str) -> RoleProfile {
        RoleProfile {
            role_id: id.to_string(),
            name: id.to_uppercase(),
            summary: String::new(),
            required_skills: SkillSet::from_labels(&["SQL"]),
            preferred_skills: SkillSet::new(),
            related_interests: vec![],
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(Catalog::new(catalog.roles().to_vec()).is_ok());
        assert!(catalog.get("swe").is_some());
        assert!(catalog.len() >= 5);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        assert!(Catalog::new(vec![role("swe"), role("swe")]).is_err());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(Catalog::new(vec![]).is_err());
    }

    #[test]
    fn test_require_unknown_role() {
        let catalog = Catalog::new(vec![role("swe")]).unwrap();
        assert!(matches!(
            catalog.require("astronaut"),
            Err(AppError::UnknownRole(id)) if id == "astronaut"
        ));
    }

    #[test]
    fn test_skill_vocabulary_dedupes_across_roles() {
        let mut second = role("analyst");
        second.preferred_skills = SkillSet::from_labels(&["sql", "Excel"]);
        let catalog = Catalog::new(vec![role("swe"), second]).unwrap();
        assert_eq!(catalog.skill_vocabulary().labels(), vec!["SQL", "Excel"]);
    }

    #[test]
    fn test_from_json_file_keeps_declaration_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"roleId": "b", "name": "B", "requiredSkills": ["Go"]}},
                {{"roleId": "a", "name": "A", "requiredSkills": ["Rust"], "preferredSkills": ["Linux"]}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        let ids: Vec<_> = catalog.roles().iter().map(|r| r.role_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
