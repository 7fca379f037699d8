//! Resume skill extraction: finds catalog skills mentioned in free resume text.

use crate::errors::AppError;
use crate::models::skill::SkillSet;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// True if `needle` occurs in `haystack` with no word character on either side.
/// Both sides are expected lower-cased.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..].chars().next().map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}

/// Skills from `vocabulary` that the text mentions, case-insensitively and on word
/// boundaries, in vocabulary order. Labels keep the vocabulary's spelling.
pub fn extract_skills(text: &str, vocabulary: &SkillSet) -> SkillSet {
    let normalized = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    vocabulary
        .iter()
        .filter(|skill| contains_word(&normalized, skill.key()))
        .cloned()
        .collect()
}

/// Pulls the text layer out of an uploaded PDF. Parser failures, panics included,
/// are reported as a bad upload.
pub async fn pdf_text(bytes: Vec<u8>) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::Validation("Could not read PDF".to_string())
            } else {
                AppError::Internal(e.into())
            }
        })?
        .map_err(|e| AppError::Validation(format!("Could not read PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Validation("PDF has no extractable text".to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> SkillSet {
        SkillSet::from_labels(&["SQL", "Python", "Java", "C++", "Machine Learning", "Git"])
    }

    #[test]
    fn test_finds_mentioned_skills_in_vocabulary_order() {
        let text = "Built ETL jobs in python and sql. Versioned everything with GIT.";
        assert_eq!(
            extract_skills(text, &vocabulary()).labels(),
            vec!["SQL", "Python", "Git"]
        );
    }

    #[test]
    fn test_respects_word_boundaries() {
        // JavaScript must not count as Java, MySQL not as SQL
        let text = "Frontend work in JavaScript, databases on MySQL, legit projects";
        assert!(extract_skills(text, &vocabulary()).is_empty());
    }

    #[test]
    fn test_multi_word_and_symbol_skills() {
        let text = "Coursework:\n  machine\n learning, C++ (STL).";
        assert_eq!(
            extract_skills(text, &vocabulary()).labels(),
            vec!["C++", "Machine Learning"]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_skills("", &vocabulary()).is_empty());
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_validation_error() {
        let err = pdf_text(b"not a pdf".to_vec()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
