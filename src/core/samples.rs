//! Built-in sample texts for demos and smoke checks

use serde::Serialize;
use crate::types::AnalysisContext;

/// A ready-made input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleText {
    pub category: &'static str,
    pub label: &'static str,
    pub context: Option<AnalysisContext>,
    pub text: &'static str,
}

pub const SAMPLE_TEXTS: &[SampleText] = &[
    SampleText {
        category: "Product Review",
        label: "Positive Review",
        context: Some(AnalysisContext::Review),
        text: "This product is absolutely amazing! The quality exceeded my expectations and the design is beautiful. I would definitely recommend it to anyone looking for something reliable and stylish.",
    },
    SampleText {
        category: "Service Feedback",
        label: "Service Issue",
        context: Some(AnalysisContext::Feedback),
        text: "I'm really disappointed with the service I received. The staff seemed uninterested and I had to wait way too long for assistance. This was not the experience I was hoping for.",
    },
    SampleText {
        category: "Product Review",
        label: "Mixed Review",
        context: Some(AnalysisContext::Review),
        text: "The item I ordered was decent quality but not quite what I expected. The delivery was fast which was great, but the product itself was just okay. Mixed feelings overall.",
    },
    SampleText {
        category: "Social Media",
        label: "Social Praise",
        context: Some(AnalysisContext::Social),
        text: "Just tried this new restaurant and WOW! The food was incredible and the atmosphere was perfect. Already planning my next visit! #foodie #amazing",
    },
    SampleText {
        category: "General Feedback",
        label: "Professional Praise",
        context: Some(AnalysisContext::Feedback),
        text: "The team did an outstanding job on this project. Their attention to detail and professionalism really impressed me. This is exactly the kind of work I was looking for!",
    },
    SampleText {
        category: "Product Review",
        label: "Product Issue",
        context: Some(AnalysisContext::Review),
        text: "Unfortunately, this purchase was a complete waste of money. The item broke after just one use and the quality is terrible. I'm requesting a full refund.",
    },
    SampleText {
        category: "Experience Review",
        label: "Event Feedback",
        context: Some(AnalysisContext::Feedback),
        text: "Had such a wonderful time at the event! Everything was well organized and the staff was incredibly friendly and helpful. Will definitely attend again next year.",
    },
    SampleText {
        category: "App Review",
        label: "Tech Review",
        context: Some(AnalysisContext::Review),
        text: "The app works well most of the time but has some bugs that need fixing. The interface is clean and intuitive, but the occasional crashes are frustrating. Good potential though.",
    },
];
