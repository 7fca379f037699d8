use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("skill name cannot be empty")]
pub struct EmptySkill;

/// A skill identifier compared by its canonical key.
///
/// The key is trimmed, whitespace-collapsed and lower-cased, so `" Machine  Learning"`
/// and `"machine learning"` are the same skill. The label keeps the first spelling seen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Skill {
    key: String,
    label: String,
}

impl Skill {
    pub fn new(raw: &str) -> Result<Self, EmptySkill> {
        let label = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if label.is_empty() {
            return Err(EmptySkill);
        }
        Ok(Self {
            key: label.to_lowercase(),
            label,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Skill {}

impl Hash for Skill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl TryFrom<String> for Skill {
    type Error = EmptySkill;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Skill::new(&value)
    }
}

impl From<Skill> for String {
    fn from(skill: Skill) -> Self {
        skill.label
    }
}

/// Insertion-ordered skill collection with no duplicates after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Skill>", into = "Vec<Skill>")]
pub struct SkillSet {
    skills: Vec<Skill>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw labels, silently skipping blank ones.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        labels
            .iter()
            .filter_map(|l| Skill::new(l.as_ref()).ok())
            .collect()
    }

    /// Returns `false` when an equivalent skill was already present.
    pub fn insert(&mut self, skill: Skill) -> bool {
        if self.contains(&skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub fn contains(&self, skill: &Skill) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Self's skills first, then the skills of `other` not already present.
    pub fn union(&self, other: &SkillSet) -> SkillSet {
        let mut merged = self.clone();
        merged.extend(other.iter().cloned());
        merged
    }

    pub fn labels(&self) -> Vec<&str> {
        self.skills.iter().map(Skill::label).collect()
    }
}

impl Extend<Skill> for SkillSet {
    fn extend<T: IntoIterator<Item = Skill>>(&mut self, iter: T) {
        for skill in iter {
            self.insert(skill);
        }
    }
}

impl FromIterator<Skill> for SkillSet {
    fn from_iter<T: IntoIterator<Item = Skill>>(iter: T) -> Self {
        let mut set = SkillSet::new();
        set.extend(iter);
        set
    }
}

impl From<Vec<Skill>> for SkillSet {
    fn from(skills: Vec<Skill>) -> Self {
        skills.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<Skill> {
    fn from(set: SkillSet) -> Self {
        set.skills
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a Skill;
    type IntoIter = std::slice::Iter<'a, Skill>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}
