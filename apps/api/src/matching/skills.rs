use crate::catalog::Catalog;
use crate::matching::NEUTRAL_SCORE;

/// Skills overlap between a candidate and a tokenized job text.
///
/// Every catalog keyword that is itself one of the job's words is one
/// requirement, met when some candidate skill contains it. Keywords that never
/// survive tokenization ("node.js", "machine learning") therefore never count.
/// A candidate skill that is itself one of the job's words counts as an extra
/// requirement that is met. With no requirement at all the score is neutral.
pub fn skills_match(
    catalog: &Catalog,
    candidate_skills: &[String],
    job_tokens: &[String],
) -> f64 {
    if candidate_skills.is_empty() {
        return 0.0;
    }

    let candidate_lower: Vec<String> = candidate_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();

    let mut required = 0u32;
    let mut matched = 0u32;

    for keyword in &catalog.technical_keywords {
        if job_tokens.iter().any(|token| token == keyword) {
            required += 1;
            if candidate_lower.iter().any(|s| s.contains(keyword.as_str())) {
                matched += 1;
            }
        }
    }

    // direct hits
    for skill in &candidate_lower {
        if job_tokens.iter().any(|token| token == skill) {
            required += 1;
            matched += 1;
        }
    }

    if required == 0 {
        return NEUTRAL_SCORE;
    }

    (f64::from(matched) / f64::from(required)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn score(candidate: &[&str], job_text: &str) -> f64 {
        skills_match(&Catalog::default(), &skills(candidate), &tokenize(job_text))
    }

    #[test]
    fn test_no_candidate_skills_is_zero() {
        assert_eq!(score(&[], "Python, AWS, Docker, Kubernetes"), 0.0);
        assert_eq!(score(&[], ""), 0.0);
    }

    #[test]
    fn test_full_overlap() {
        let s = score(
            &["Python", "AWS"],
            "5+ years experience with Python and AWS, Bachelor's degree required",
        );
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        // required: python, docker (catalog) + python (direct) = 3; matched: python x2
        let s = score(&["Python"], "Python and Docker");
        assert!((s - 2.0 / 3.0).abs() < 1e-9, "Score was {s}");
    }

    #[test]
    fn test_no_requirements_is_neutral() {
        assert_eq!(score(&["Cooking"], "Friendly team, great coffee"), 0.5);
    }

    #[test]
    fn test_skill_substring_satisfies_keyword() {
        // the job only names "sql"; "postgresql" contains it
        let s = score(&["PostgreSQL"], "SQL databases");
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_dotted_keyword_not_required_by_its_prefix() {
        // "node.js" is never a job token, so "Node" alone requires nothing
        assert_eq!(score(&["Go"], "Node backend"), 0.5);
    }

    #[test]
    fn test_multi_word_keyword_never_required() {
        // required: python (catalog) + python (direct) = 2; "machine learning" ignored
        assert_eq!(score(&["Python"], "Python and machine learning"), 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score(&["DOCKER"], "docker"), 1.0);
    }

    #[test]
    fn test_capped_at_one() {
        let s = score(&["Python", "python", "Django"], "python django");
        assert!(s <= 1.0);
    }
}
