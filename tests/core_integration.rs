//! Integration tests for the scoring core
//!
//! Tests the full path: text → tokenizer → scorers → AnalysisRecord

use pretty_assertions::assert_eq;
use vibecheckr::core::{tokenize, Lexicon, PolarityScorer, SentimentAnalyzer, SAMPLE_TEXTS};
use vibecheckr::types::{AnalysisContext, Emotion, Sentiment};
use vibecheckr::{analyze, CONFIDENCE_FLOOR, MAX_KEYWORDS};

const CORPUS: &[&str] = &[
    "",
    "   ",
    "!!!",
    "This product is absolutely amazing! Best purchase ever, I love it.",
    "This is terrible and I hate it, worst experience ever.",
    "Great!!! Amazing???",
    "good bad",
    "The meeting is at 3pm in room 42.",
    "Rude, slow, unhelpful and dismissive staff. Never again.",
    "Incredible, outstanding, superb, brilliant, magnificent, exceptional!",
    "I'm scared and worried, but also excited and happy. Shocked, honestly.",
    "ünïcödé wörds, émojis 🎉 and CAPS",
];

fn all_contexts() -> [Option<AnalysisContext>; 4] {
    [
        None,
        Some(AnalysisContext::Review),
        Some(AnalysisContext::Feedback),
        Some(AnalysisContext::Social),
    ]
}

// =============================================================================
// INVARIANTS
// =============================================================================

#[test]
fn test_scores_always_sum_to_one() {
    for text in CORPUS.iter().copied().chain(SAMPLE_TEXTS.iter().map(|s| s.text)) {
        for context in all_contexts() {
            let record = analyze(text, context);
            let sum = record.scores.positive + record.scores.negative + record.scores.neutral;
            assert!((sum - 1.0).abs() < 1e-6, "scores sum {} for {:?}", sum, text);
        }
    }
}

#[test]
fn test_confidence_within_bounds() {
    for text in CORPUS {
        for context in all_contexts() {
            let record = analyze(text, context);
            assert!(record.confidence >= CONFIDENCE_FLOOR, "confidence too low for {:?}", text);
            assert!(record.confidence <= 1.0, "confidence too high for {:?}", text);
        }
    }
}

#[test]
fn test_emotions_within_unit_interval() {
    for text in CORPUS {
        let record = analyze(text, None);
        for emotion in Emotion::ALL {
            let value = record.emotions.get(emotion);
            assert!((0.0..=1.0).contains(&value), "{} = {} for {:?}", emotion, value, text);
        }
    }
}

#[test]
fn test_sentiment_is_argmax_with_precedence() {
    for text in CORPUS.iter().skip(2) {
        let record = analyze(text, None);
        let s = record.scores;
        let expected = if s.positive >= s.negative && s.positive >= s.neutral {
            Sentiment::Positive
        } else if s.negative >= s.neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        assert_eq!(record.sentiment, expected, "wrong class for {:?}", text);
        assert_eq!(record.confidence, record.scores.get(record.sentiment).max(CONFIDENCE_FLOOR));
    }
}

#[test]
fn test_keywords_bounded_and_long_enough() {
    let long_text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima mike november oscar";
    let record = analyze(long_text, None);
    assert_eq!(record.keywords.len(), MAX_KEYWORDS);
    for text in CORPUS {
        for keyword in analyze(text, None).keywords {
            assert!(keyword.chars().count() > 3, "short keyword {:?}", keyword);
        }
    }
}

// =============================================================================
// DOCUMENTED EXAMPLES
// =============================================================================

#[test]
fn test_empty_text() {
    let record = analyze("", None);
    assert_eq!(record.sentiment, Sentiment::Neutral);
    assert_eq!(record.confidence, CONFIDENCE_FLOOR);
    assert_eq!(record.word_count, 0);
    assert_eq!(record.keywords, Vec::<String>::new());
    assert_eq!(record.scores.positive, 0.0);
    assert_eq!(record.scores.negative, 0.0);
    assert_eq!(record.scores.neutral, 1.0);
}

#[test]
fn test_punctuation_only_text_is_not_blank() {
    let record = analyze("!!! ???", None);
    assert_eq!(record.word_count, 0);
    assert_eq!(record.sentiment, Sentiment::Neutral);
    assert_eq!(record.confidence, 1.0);
}

#[test]
fn test_exhausted_tally_has_zero_neutral() {
    // "Product Issue": one positive hit, two negative hits
    let sample = SAMPLE_TEXTS.iter().find(|s| s.label == "Product Issue").unwrap();
    let record = analyze(sample.text, sample.context);
    assert_eq!(record.sentiment, Sentiment::Negative);
    assert_eq!(record.scores.neutral, 0.0);
}

#[test]
fn test_positive_example() {
    let record = analyze("This product is absolutely amazing! Best purchase ever, I love it.", None);
    assert_eq!(record.sentiment, Sentiment::Positive);
    assert!(record.scores.positive > record.scores.negative);
    assert!(record.scores.positive > record.scores.neutral);
    assert!(record.confidence >= CONFIDENCE_FLOOR);
    assert!(!record.keywords.is_empty());
    assert!(
        record.keywords.iter().any(|k| k == "amazing" || k == "purchase" || k == "love"),
        "keywords were {:?}",
        record.keywords
    );
    // "amazing" and "love" are joy triggers
    assert_eq!(record.emotions.joy, 0.5);
}

#[test]
fn test_negative_example() {
    let record = analyze("This is terrible and I hate it, worst experience ever.", None);
    assert_eq!(record.sentiment, Sentiment::Negative);
    assert!(record.scores.negative > record.scores.positive);
    assert!(record.scores.negative > record.scores.neutral);
    // "terrible" and "hate" are anger triggers
    assert_eq!(record.emotions.anger, 0.5);
}

#[test]
fn test_dominant_emotion_of_record() {
    let record = analyze("This is terrible and I hate it, worst experience ever.", None);
    assert_eq!(record.emotions.dominant(), Some(Emotion::Anger));
    assert_eq!(analyze("The meeting is at 3pm in room 42.", None).emotions.dominant(), None);
}

#[test]
fn test_punctuation_stripped() {
    assert_eq!(tokenize("Great!!! Amazing???"), vec!["great", "amazing"]);
    let record = analyze("Great!!! Amazing???", None);
    assert_eq!(record.keywords, vec!["great", "amazing"]);
    assert_eq!(record.word_count, 2);
}

// =============================================================================
// CONTEXT
// =============================================================================

#[test]
fn test_feedback_context_shifts_negative_tally() {
    // "dismissive" is only in the contextual negative list
    let text = "The receptionist was dismissive when I asked a question.";
    let lexicon = Lexicon::builtin();
    assert!(tokenize(text).iter().all(|t| !lexicon.negative.contains(t)));

    let scorer = PolarityScorer::new();
    let plain = scorer.tally(&tokenize(text), None);
    let feedback = scorer.tally(&tokenize(text), Some(AnalysisContext::Feedback));
    assert!(feedback.negative > plain.negative);

    let plain = analyze(text, None);
    let feedback = analyze(text, Some(AnalysisContext::Feedback));
    assert_eq!(plain.sentiment, Sentiment::Neutral);
    assert_eq!(feedback.sentiment, Sentiment::Negative);
    assert!(feedback.scores.negative > plain.scores.negative);
}

#[test]
fn test_non_feedback_contexts_match_no_context() {
    let text = "Patient, knowledgeable and accommodating team but rude manager";
    let base = analyze(text, None);
    for context in [AnalysisContext::Review, AnalysisContext::Social] {
        let record = analyze(text, Some(context));
        assert_eq!(record.scores, base.scores);
        assert_eq!(record.sentiment, base.sentiment);
        assert_eq!(record.confidence, base.confidence);
        assert_eq!(record.analysis_context, Some(context));
    }
}

#[test]
fn test_unknown_context_tag_means_no_boosting() {
    let text = "so dismissive";
    let tagged = analyze(text, AnalysisContext::from_tag("complaint"));
    let plain = analyze(text, None);
    assert_eq!(tagged.scores, plain.scores);
    assert_eq!(tagged.analysis_context, None);
}

// =============================================================================
// DETERMINISM + CONCURRENCY
// =============================================================================

#[test]
fn test_keywords_idempotent_and_order_stable() {
    let text = "Battery life is great, battery charging is slow, screen is great too";
    let first = analyze(text, None).keywords;
    for _ in 0..10 {
        assert_eq!(analyze(text, None).keywords, first);
    }
    assert_eq!(first[0], "battery");
}

#[test]
fn test_parallel_analysis_matches_sequential() {
    let analyzer = SentimentAnalyzer::new();
    let expected: Vec<_> = SAMPLE_TEXTS
        .iter()
        .map(|s| analyzer.analyze(s.text, s.context))
        .collect();

    let handles: Vec<_> = SAMPLE_TEXTS
        .iter()
        .map(|s| std::thread::spawn(move || analyzer.analyze(s.text, s.context)))
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        let got = handle.join().unwrap();
        assert_eq!(got.scores, want.scores);
        assert_eq!(got.emotions, want.emotions);
        assert_eq!(got.keywords, want.keywords);
        assert_ne!(got.id, want.id);
    }
}

#[test]
fn test_record_serializes_camel_case() {
    let record = analyze("good", Some(AnalysisContext::Feedback));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["sentiment"], "positive");
    assert_eq!(json["wordCount"], 1);
    assert_eq!(json["analysisContext"], "feedback");
    assert!(json["emotions"]["joy"].is_number());

    let untagged = serde_json::to_value(analyze("good", None)).unwrap();
    assert!(untagged.get("analysisContext").is_none());
}
