//! Polarity Scorer: tokens → positive/negative/neutral distribution
//!
//! Tally lexicon hits, normalize against the tally total, amplify the
//! leading class, renormalize, then pick the winner with a confidence floor.

use crate::{
    AMPLIFY_FACTOR, AMPLIFY_THRESHOLD, CONFIDENCE_FLOOR,
    CONTEXTUAL_BOOST, INTENSIFIER_BOOST,
};
use crate::core::lexicon::Lexicon;
use crate::types::{AnalysisContext, PolarityScores, PolarityTally, Sentiment};

/// Final polarity verdict for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityResult {
    pub tally: PolarityTally,
    pub scores: PolarityScores,
    pub sentiment: Sentiment,
    /// Share of the winning class, before the floor
    pub raw_confidence: f64,
    /// `max(raw_confidence, CONFIDENCE_FLOOR)`
    pub confidence: f64,
}

/// Lexicon-driven polarity scorer
#[derive(Debug, Clone, Copy)]
pub struct PolarityScorer<'a> {
    lexicon: &'a Lexicon,
}

impl PolarityScorer<'static> {
    /// Scorer over the built-in lexicon
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }
}

impl Default for PolarityScorer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PolarityScorer<'a> {
    pub fn with_lexicon(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Full scoring pass
    pub fn score(&self, tokens: &[String], context: Option<AnalysisContext>) -> PolarityResult {
        let tally = self.tally(tokens, context);
        let scores = distribute(tally);
        let (sentiment, raw_confidence) = scores.leading();

        PolarityResult {
            tally,
            scores,
            sentiment,
            raw_confidence,
            confidence: raw_confidence.max(CONFIDENCE_FLOOR),
        }
    }

    /// Raw positive/negative tally.
    ///
    /// A token may hit several sets; every hit counts.
    pub fn tally(&self, tokens: &[String], context: Option<AnalysisContext>) -> PolarityTally {
        let lex = self.lexicon;
        let mut tally = PolarityTally::default();

        for token in tokens {
            let token = token.as_str();
            if lex.positive.contains(token) {
                tally.positive += 1.0;
            }
            if lex.negative.contains(token) {
                tally.negative += 1.0;
            }
            if lex.intensifiers.contains(token) {
                tally.positive += INTENSIFIER_BOOST;
            }
        }

        if context == Some(AnalysisContext::Feedback) {
            for token in tokens {
                let token = token.as_str();
                if lex.contextual.positive.contains(token) {
                    tally.positive += CONTEXTUAL_BOOST;
                }
                if lex.contextual.negative.contains(token) {
                    tally.negative += CONTEXTUAL_BOOST;
                }
            }
        }

        tally
    }
}

const RESIDUE_EPSILON: f64 = 1e-12;

/// Tally → normalized, amplified, renormalized distribution
pub fn distribute(tally: PolarityTally) -> PolarityScores {
    let total = tally.total();
    if total <= 0.0 {
        return PolarityScores::neutral_only();
    }

    let mut positive = tally.positive / total;
    let mut negative = tally.negative / total;
    // Residual mass; the tallies exhaust the total, so anything left is rounding
    let residue = 1.0 - positive - negative;
    let neutral = if residue.abs() < RESIDUE_EPSILON { 0.0 } else { residue.max(0.0) };

    // Only the class already in front gets boosted
    if positive > negative && positive > AMPLIFY_THRESHOLD {
        positive = (positive * AMPLIFY_FACTOR).min(1.0);
    } else if negative > positive && negative > AMPLIFY_THRESHOLD {
        negative = (negative * AMPLIFY_FACTOR).min(1.0);
    }

    let sum = positive + negative + neutral;
    PolarityScores {
        positive: positive / sum,
        negative: negative / sum,
        neutral: neutral / sum,
    }
}

// =============================================================================
// TESTS
// =============================================================================
