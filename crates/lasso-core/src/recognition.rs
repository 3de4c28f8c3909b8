use lasso_types::{Fragment, RecognitionResult};

/// Fragments below this confidence are dropped from the concatenated text.
///
/// Some upstream variants filtered at 0.3 and some not at all; one policy,
/// applied everywhere.
pub const CONFIDENCE_CUTOFF: f32 = 0.3;

/// Fragments at or above `cutoff`, joined with newlines.
pub fn concatenate(result: &RecognitionResult, cutoff: f32) -> String {
    result
        .fragments
        .iter()
        .filter(|f| f.confidence >= cutoff)
        .map(|f| f.text.as_str())
        .filter(|t| !t.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Mean confidence over the fragments that survive the cutoff; 0.0 when
/// none do.
pub fn average_confidence(result: &RecognitionResult, cutoff: f32) -> f32 {
    let kept: Vec<f32> = result
        .fragments
        .iter()
        .filter(|f| f.confidence >= cutoff)
        .map(|f| f.confidence)
        .collect();
    if kept.is_empty() {
        return 0.0;
    }
    kept.iter().sum::<f32>() / kept.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use lasso_types::BoundingBox;

    fn fragment(text: &str, confidence: f32) -> Fragment {
        Fragment {
            bounds: BoundingBox {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
            },
            text: text.to_string(),
            confidence,
        }
    }

    #[test]
    fn low_confidence_fragments_are_excluded() {
        let result = RecognitionResult {
            fragments: vec![
                fragment("keep me", 0.9),
                fragment("noise", 0.2),
                fragment("also keep", 0.31),
            ],
        };
        assert_eq!(
            concatenate(&result, CONFIDENCE_CUTOFF),
            "keep me\nalso keep"
        );
    }

    #[test]
    fn cutoff_is_inclusive() {
        let result = RecognitionResult {
            fragments: vec![fragment("edge", CONFIDENCE_CUTOFF)],
        };
        assert_eq!(concatenate(&result, CONFIDENCE_CUTOFF), "edge");
    }

    #[test]
    fn average_ignores_filtered_fragments() {
        let result = RecognitionResult {
            fragments: vec![fragment("a", 0.8), fragment("b", 0.6), fragment("x", 0.1)],
        };
        let avg = average_confidence(&result, CONFIDENCE_CUTOFF);
        assert!((avg - 0.7).abs() < 1e-6);
    }

    #[test]
    fn empty_result_has_zero_confidence() {
        let result = RecognitionResult::default();
        assert_eq!(average_confidence(&result, CONFIDENCE_CUTOFF), 0.0);
        assert_eq!(concatenate(&result, CONFIDENCE_CUTOFF), "");
    }

    #[test]
    fn blank_fragments_do_not_produce_empty_lines() {
        let result = RecognitionResult {
            fragments: vec![fragment("  ", 0.9), fragment("text", 0.9)],
        };
        assert_eq!(concatenate(&result, CONFIDENCE_CUTOFF), "text");
    }
}
