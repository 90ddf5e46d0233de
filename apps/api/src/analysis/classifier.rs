//! Local skill-gap classifier: a deterministic keyword scan of a resume against a role model.
//!
//! Runs before any generative call and stays correct if that call never happens.
//!
//! Algorithm:
//! 1. For every category, the category is covered when any of its skills occurs
//!    in the resume (case-insensitive substring). Uncovered categories produce a
//!    `"Basic <Category> Knowledge"` label.
//! 2. Every must-have skill absent from the resume is reported by name.
//! 3. Labels are collected into a `GapSet`, which deduplicates and orders them.

use std::collections::BTreeSet;

use crate::taxonomy::RoleModel;

/// Deduplicated set of gap labels with a stable (sorted) rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapSet(BTreeSet<String>);

impl GapSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a label, ignoring surrounding whitespace and blank labels.
    pub fn insert(&mut self, label: impl AsRef<str>) {
        let label = label.as_ref().trim();
        if !label.is_empty() {
            self.0.insert(label.to_string());
        }
    }

    #[cfg(test)]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn union(&self, other: &GapSet) -> GapSet {
        GapSet(self.0.union(&other.0).cloned().collect())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for GapSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = GapSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

/// Label emitted when no skill of a category appears in the resume.
/// Underscores in category keys (`ML_Libraries`) are rendered as spaces.
pub fn category_gap_label(category: &str) -> String {
    format!("Basic {} Knowledge", category.replace('_', " "))
}

/// Returns every gap the resume shows against `model`. Pure and deterministic.
pub fn detect_skill_gaps(resume_text: &str, model: &RoleModel) -> GapSet {
    let haystack = resume_text.to_lowercase();
    let mentions = |skill: &String| haystack.contains(&skill.to_lowercase());

    let mut gaps = GapSet::new();

    for category in &model.categories {
        if !category.skills.iter().any(mentions) {
            gaps.insert(category_gap_label(&category.name));
        }
    }

    for skill in &model.must_haves {
        if !mentions(skill) {
            gaps.insert(skill);
        }
    }

    gaps
}
