use crate::text::term_frequencies;

/// Frequency-weighted overlap of candidate and job vocabulary.
///
/// Each word shared by both texts contributes `min(cf, jf)` out of `jf`,
/// where `jf` is its count in the job text, so words the job repeats carry
/// more weight. Disjoint vocabularies score 0.
pub fn keyword_match(candidate_tokens: &[String], job_tokens: &[String]) -> f64 {
    if candidate_tokens.is_empty() || job_tokens.is_empty() {
        return 0.0;
    }

    let candidate_freq = term_frequencies(candidate_tokens);
    let job_freq = term_frequencies(job_tokens);

    let mut score = 0.0;
    let mut total_weight = 0.0;

    for (word, &job_count) in &job_freq {
        let Some(&candidate_count) = candidate_freq.get(word) else {
            continue;
        };
        let job_weight = f64::from(job_count);
        let word_score = f64::from(candidate_count.min(job_count)) / job_weight;
        score += word_score * job_weight;
        total_weight += job_weight;
    }

    if total_weight > 0.0 {
        score / total_weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    fn score(candidate: &str, job: &str) -> f64 {
        keyword_match(&tokenize(candidate), &tokenize(job))
    }

    #[test]
    fn test_empty_side_is_zero() {
        assert_eq!(score("", "python developer"), 0.0);
        assert_eq!(score("python developer", ""), 0.0);
    }

    #[test]
    fn test_disjoint_vocabulary_is_zero() {
        assert_eq!(score("gardening cooking", "python kubernetes"), 0.0);
        let long = "gardening ".repeat(500);
        assert_eq!(score(&long, "python kubernetes"), 0.0);
    }

    #[test]
    fn test_identical_text_is_one() {
        assert_eq!(score("python python aws", "python python aws"), 1.0);
    }

    #[test]
    fn test_job_frequency_weighting() {
        // shared: python (jf 3, cf 1), aws (jf 1, cf 1)
        // (1/3*3 + 1*1) / (3 + 1) = 2/4
        let s = score("python aws", "python python python aws");
        assert!((s - 0.5).abs() < 1e-9, "Score was {s}");
    }

    #[test]
    fn test_unshared_job_words_do_not_dilute() {
        // only shared words enter the denominator
        assert_eq!(score("rust", "rust tokio axum serde"), 1.0);
    }
}
