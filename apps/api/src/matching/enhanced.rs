//! AI-enhanced ranking: lets the AI backend re-score and explain matches, but
//! always falls back to the deterministic ranking.
//!
//! The AI may only change `score` (and therefore `level`) and `explanation`.
//! Matched and gap skills always come from the deterministic scorer. Roles the
//! AI leaves out keep their deterministic score.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{info, warn};

use crate::ai::{call_with_fallback, CareerAi, RoleAssessment};
use crate::catalog::Catalog;
use crate::matching::scoring::{rank_roles, score_role, RoleMatch};
use crate::models::profile::StudentProfile;

pub async fn rank_roles_enhanced(
    ai: &dyn CareerAi,
    profile: &StudentProfile,
    catalog: &Catalog,
    limit: Option<usize>,
    timeout: Duration,
) -> Vec<RoleMatch> {
    let assessments =
        call_with_fallback("role assessment", timeout, ai.assess_roles(profile, catalog)).await;

    let Some(assessments) = assessments else {
        return rank_roles(profile, catalog.roles(), limit);
    };

    match merge_assessments(profile, catalog, &assessments) {
        Ok(mut matches) => {
            info!(
                "Ranked {} roles with {} backend",
                matches.len(),
                ai.backend()
            );
            if let Some(limit) = limit {
                matches.truncate(limit);
            }
            matches
        }
        Err(reason) => {
            warn!("Rejected AI role assessment ({reason}), using deterministic ranking");
            rank_roles(profile, catalog.roles(), limit)
        }
    }
}

/// Validates assessments and applies them over the deterministic matches.
/// Output is sorted by score, stable on catalog order.
fn merge_assessments(
    profile: &StudentProfile,
    catalog: &Catalog,
    assessments: &[RoleAssessment],
) -> Result<Vec<RoleMatch>, String> {
    let mut by_role: HashMap<&str, &RoleAssessment> = HashMap::new();
    for a in assessments {
        if catalog.get(&a.role_id).is_none() {
            return Err(format!("unknown role '{}'", a.role_id));
        }
        if !(0..=100).contains(&a.score) {
            return Err(format!("score {} for '{}' out of range", a.score, a.role_id));
        }
        if by_role.insert(a.role_id.as_str(), a).is_some() {
            return Err(format!("duplicate role '{}'", a.role_id));
        }
    }

    let mut matches: Vec<RoleMatch> = catalog
        .roles()
        .iter()
        .map(|role| {
            let base = score_role(profile, role);
            match by_role.get(role.role_id.as_str()) {
                Some(a) => base.rescored(a.score as u8, a.explanation.clone()),
                None => base,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(matches)
}
