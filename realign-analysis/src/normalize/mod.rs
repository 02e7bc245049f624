//! Response normalization — maps raw answers onto [0, 1].
//!
//! Pure functions; nothing here can fail. Malformed values degrade:
//! out-of-domain numbers are clamped, unmapped categories and unknown
//! question types fall back to the neutral midpoint, and every
//! degradation is recorded as a warning for downstream confidence
//! penalization. A scan with a typo must not crash the pipeline.

use realign_core::config::ScoringConfig;
use realign_core::constants::NEUTRAL_MIDPOINT;
use realign_core::types::{NormalizedResponse, QuestionType, RawAnswer, Response};
use realign_core::warnings::DataWarning;

/// Result of normalizing a batch of responses.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub responses: Vec<NormalizedResponse>,
    pub warnings: Vec<DataWarning>,
}

/// Normalize a batch, accumulating warnings across all responses.
pub fn normalize_responses(config: &ScoringConfig, responses: &[Response]) -> NormalizedBatch {
    let mut batch = NormalizedBatch {
        responses: Vec::with_capacity(responses.len()),
        warnings: Vec::new(),
    };
    for response in responses {
        let (normalized, mut warnings) = normalize_response(config, response);
        batch.responses.push(normalized);
        batch.warnings.append(&mut warnings);
    }
    if !batch.warnings.is_empty() {
        tracing::debug!(
            count = batch.warnings.len(),
            total = responses.len(),
            "normalization produced warnings"
        );
    }
    batch
}

/// Normalize a single response according to its declared question type.
pub fn normalize_response(
    config: &ScoringConfig,
    response: &Response,
) -> (NormalizedResponse, Vec<DataWarning>) {
    let mut warnings = Vec::new();
    let qid = &response.question_id;

    let (normalized, low_confidence) = match &response.question_type {
        QuestionType::Likert => scale_answer(qid, &response.raw, 1.0, 5.0, &mut warnings),
        QuestionType::Numeric { min, max } => {
            if max <= min {
                warnings.push(DataWarning::DegenerateDomain {
                    question_id: qid.clone(),
                });
                (NEUTRAL_MIDPOINT, true)
            } else {
                scale_answer(qid, &response.raw, *min, *max, &mut warnings)
            }
        }
        QuestionType::Percentage => scale_answer(qid, &response.raw, 0.0, 100.0, &mut warnings),
        QuestionType::Categorical => normalize_categorical(config, qid, &response.raw, &mut warnings),
        QuestionType::Unknown => {
            // Safe default: numeric over [0, 100].
            warnings.push(DataWarning::UnknownQuestionType {
                question_id: qid.clone(),
            });
            let (value, _) = scale_answer(qid, &response.raw, 0.0, 100.0, &mut warnings);
            (value, true)
        }
    };

    (
        NormalizedResponse {
            question_id: response.question_id.clone(),
            dimension_tags: response.dimension_tags.clone(),
            raw: response.raw.clone(),
            normalized,
            low_confidence,
        },
        warnings,
    )
}

/// Linearly rescale an answer over [min, max], clamping out-of-domain
/// values rather than rejecting them. Returns (value, low_confidence).
fn scale_answer(
    question_id: &str,
    raw: &RawAnswer,
    min: f64,
    max: f64,
    warnings: &mut Vec<DataWarning>,
) -> (f64, bool) {
    let value = match numeric_value(raw) {
        Some(v) => v,
        None => {
            warnings.push(DataWarning::UnmappedCategory {
                question_id: question_id.to_string(),
                value: raw_text(raw),
            });
            return (NEUTRAL_MIDPOINT, true);
        }
    };
    if value < min || value > max {
        warnings.push(DataWarning::ValueOutOfDomain {
            question_id: question_id.to_string(),
            value,
        });
    }
    (((value - min) / (max - min)).clamp(0.0, 1.0), false)
}

fn normalize_categorical(
    config: &ScoringConfig,
    question_id: &str,
    raw: &RawAnswer,
    warnings: &mut Vec<DataWarning>,
) -> (f64, bool) {
    let category = match raw {
        RawAnswer::Text(text) => text.trim(),
        RawAnswer::Number(n) => {
            warnings.push(DataWarning::UnmappedCategory {
                question_id: question_id.to_string(),
                value: n.to_string(),
            });
            return (NEUTRAL_MIDPOINT, true);
        }
    };
    match config.category_value(question_id, category) {
        Some(value) => (value.clamp(0.0, 1.0), false),
        None => {
            warnings.push(DataWarning::UnmappedCategory {
                question_id: question_id.to_string(),
                value: category.to_string(),
            });
            (NEUTRAL_MIDPOINT, true)
        }
    }
}

/// Extract a numeric value from an answer. Text answers are parsed
/// leniently ("85", "85%") since uploaded scans carry such artifacts.
fn numeric_value(raw: &RawAnswer) -> Option<f64> {
    match raw {
        RawAnswer::Number(n) if n.is_finite() => Some(*n),
        RawAnswer::Number(_) => None,
        RawAnswer::Text(text) => {
            let trimmed = text.trim().trim_end_matches('%').trim();
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
    }
}

fn raw_text(raw: &RawAnswer) -> String {
    match raw {
        RawAnswer::Number(n) => n.to_string(),
        RawAnswer::Text(t) => t.clone(),
    }
}
