//! Static copy for the analysis guide page.
//!
//! Everything here is compile-time data; the guide performs no I/O.

#[cfg(test)]
#[path = "guide_content_test.rs"]
mod tests;

use records::LeadType;

pub const BRAND: &str = "GrowthLens";
pub const TAGLINE: &str = "AI Powered. Growth Driven.";

/// A credit link in the footer. Opens in a new tab.
#[derive(Clone, Copy, Debug)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const COPYRIGHT: &str = "© 2026 GrowthLens. All rights reserved.";
pub const CREDIT_PREFIX: &str = "Developed by";
pub const DEVELOPER_LINK: FooterLink = FooterLink {
    label: "Rajpal Singh",
    href: "https://rathorerajpal.live",
};
pub const SOURCE_LINK: FooterLink = FooterLink {
    label: "GitHub",
    href: "https://github.com/Rathore-Rajpal",
};

pub const HERO_BADGE: &str = "Analysis Guide";
pub const HERO_TITLE: &str = "How GrowthLens AI Analysis Works";
pub const HERO_SUBTITLE: &str =
    "Understanding the AI-powered analysis pipeline, metrics, and how to leverage insights for sales growth";

/// Visual weight of a score band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Primary,
    Warning,
    Destructive,
}

#[derive(Clone, Copy, Debug)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// Technology note; only pipeline steps carry one.
    pub tech: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct ScoreBand {
    pub range: &'static str,
    pub rating: &'static str,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug)]
pub struct BulletGroup {
    pub heading: &'static str,
    /// Classification whose color marks the group, if any.
    pub accent: Option<LeadType>,
    pub items: &'static [&'static str],
}

/// One collapsible item of the metrics accordion.
#[derive(Clone, Copy, Debug)]
pub struct Metric {
    pub key: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub bands: &'static [ScoreBand],
    pub groups: &'static [BulletGroup],
    pub note: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct KnowledgeSource {
    pub title: &'static str,
    pub body: &'static str,
    pub uses: &'static [&'static str],
}

// =============================================================================
// OVERVIEW
// =============================================================================

pub const OVERVIEW_TITLE: &str = "What is GrowthLens?";
pub const OVERVIEW_INTRO: &str = "GrowthLens is an AI-powered sales call analysis platform that transforms \
     conversations into actionable insights. By analyzing call recordings and transcripts, it provides deep \
     understanding of:";

pub const OVERVIEW_HIGHLIGHTS: &[Highlight] = &[
    Highlight { title: "Deal Quality", body: "How serious and ready is the prospect" },
    Highlight { title: "Prospect Psychology", body: "Trust levels, confidence, and intent signals" },
    Highlight { title: "Objections", body: "Detected objections and handling effectiveness" },
    Highlight { title: "Next Steps", body: "Clear action items and improvement areas" },
];

pub const ANALYSIS_QUESTIONS: &[&str] = &[
    "How serious is the prospect right now?",
    "Is trust being built or eroded during the call?",
    "Are objections clearly surfaced or hidden?",
    "Did the representative leave with one clear next step?",
    "Is this deal progressing, stalling, or quietly decaying?",
    "What should the representative improve in the very next call?",
];

// =============================================================================
// UPLOAD
// =============================================================================

pub const UPLOAD_STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Navigate to Dashboard",
        description: "Go to the main dashboard and click the 'Add Recording' button",
        tech: None,
    },
    Step {
        number: 2,
        title: "Upload Audio File or Transcript",
        description: "You can either upload an audio file (MP3, WAV, M4A, OGG) or paste a transcript directly. \
                      Supported file size: up to 100MB",
        tech: None,
    },
    Step {
        number: 3,
        title: "Associate with Lead (Optional)",
        description: "Link the recording to an existing lead for better context and tracking",
        tech: None,
    },
    Step {
        number: 4,
        title: "AI Processing Begins",
        description: "The system automatically transcribes audio (if needed) and runs AI analysis. \
                      This typically takes 2-5 minutes",
        tech: None,
    },
    Step {
        number: 5,
        title: "Review Analysis Results",
        description: "Once complete, view detailed metrics, scores, insights, and recommendations",
        tech: None,
    },
];

pub const UPLOAD_TIP: &str = "For best results, ensure audio recordings have clear audio with minimal background \
     noise. If pasting transcripts, include speaker labels (e.g., \"Agent:\", \"Prospect:\") for more accurate \
     analysis.";

// =============================================================================
// METRICS
// =============================================================================

pub const METRICS: &[Metric] = &[
    Metric {
        key: "lead-type",
        title: "Lead Type Classification (Hot/Warm/Cold)",
        intro: "The AI classifies leads into four categories based on buying signals, engagement level, and \
                readiness to purchase:",
        bands: &[],
        groups: &[
            BulletGroup {
                heading: "Hot Lead",
                accent: Some(LeadType::Hot),
                items: &[
                    "Clear budget allocated or approved",
                    "Defined timeline (days/weeks, not months)",
                    "Willingness to schedule product demo or trial",
                    "Decision-maker actively engaged",
                    "Prospect language indicates near-purchase readiness",
                ],
            },
            BulletGroup {
                heading: "Warm Lead",
                accent: Some(LeadType::Warm),
                items: &[
                    "Genuine interest in platform capabilities",
                    "Asking detailed questions (pricing, features, ROI)",
                    "Timeline exists but flexible (quarters)",
                    "Objections discussed openly",
                    "Willingness to involve stakeholders",
                ],
            },
            BulletGroup {
                heading: "Warm-Cold (In-Between)",
                accent: Some(LeadType::WarmCold),
                items: &[
                    "Polite but avoids commitment",
                    "Exploratory language (\"just checking\", \"gathering info\")",
                    "No urgency or locked next step",
                    "Timeline vague or \"future consideration\"",
                ],
            },
            BulletGroup {
                heading: "Cold Lead",
                accent: Some(LeadType::Cold),
                items: &[
                    "Minimal engagement or rushed tone",
                    "Avoidance behavior (\"send me info\", \"call later\")",
                    "No budget or timeline clarity",
                    "Not the decision-maker",
                ],
            },
        ],
        note: None,
    },
    Metric {
        key: "sentiment",
        title: "Sentiment Score (0-100)",
        intro: "Measures the overall emotional tone and attitude of the prospect during the call.",
        bands: &[
            ScoreBand { range: "80-100: Positive & Collaborative", rating: "Excellent", tone: Tone::Success },
            ScoreBand { range: "60-79: Interested & Engaged", rating: "Good", tone: Tone::Primary },
            ScoreBand { range: "40-59: Neutral or Guarded", rating: "Fair", tone: Tone::Warning },
            ScoreBand { range: "0-39: Skeptical or Dismissive", rating: "Poor", tone: Tone::Destructive },
        ],
        groups: &[],
        note: Some(
            "Higher scores indicate calm, curious, and collaborative tone. Lower scores suggest hesitation, \
             skepticism, or rushed behavior.",
        ),
    },
    Metric {
        key: "engagement",
        title: "Engagement Score (0-100)",
        intro: "Evaluates how actively involved and interested the prospect was during the conversation.",
        bands: &[],
        groups: &[BulletGroup {
            heading: "Evaluation Criteria:",
            accent: None,
            items: &[
                "Number and quality of questions asked about features, pricing, implementation",
                "Responsiveness and natural conversation flow",
                "Depth of technical or business discussion",
                "Willingness to schedule follow-ups or demos",
                "Discussion of specific use cases and needs",
            ],
        }],
        note: Some(
            "Note: Engagement is NOT based solely on call duration. A shorter, focused call with high-quality \
             questions scores higher than a long, superficial conversation.",
        ),
    },
    Metric {
        key: "confidence",
        title: "Confidence Scores (1-10)",
        intro: "Two separate confidence metrics provide different perspectives on deal viability:",
        bands: &[],
        groups: &[
            BulletGroup {
                heading: "Executive Confidence (1-10): how confident leadership would be in pushing this deal forward",
                accent: None,
                items: &[
                    "Prospect seriousness & authority",
                    "Deal value and strategic fit",
                    "Clarity of next steps",
                    "Risk assessment",
                    "Ability to address needs",
                ],
            },
            BulletGroup {
                heading: "Prospect Confidence (1-10): how likely the prospect will realistically move forward",
                accent: None,
                items: &[
                    "Budget comfort & approval path",
                    "Timeline specificity",
                    "Willingness for demo/trial",
                    "Reduced objections",
                    "Champion identification",
                ],
            },
        ],
        note: None,
    },
    Metric {
        key: "objections",
        title: "Objections Detection & Handling",
        intro: "The AI identifies and analyzes objections raised during the call and evaluates how well they were \
                addressed.",
        bands: &[],
        groups: &[
            BulletGroup {
                heading: "Common Objection Types:",
                accent: None,
                items: &[
                    "Pricing concerns",
                    "Implementation timeline",
                    "Feature gaps",
                    "Competitor comparison",
                    "Integration challenges",
                    "Change management",
                    "ROI uncertainty",
                    "Budget approval",
                ],
            },
            BulletGroup {
                heading: "Handling Evaluation: the system analyzes whether objections were:",
                accent: None,
                items: &[
                    "Acknowledged and addressed directly",
                    "Partially addressed or deflected",
                    "Ignored or avoided",
                ],
            },
        ],
        note: None,
    },
    Metric {
        key: "next-steps",
        title: "Next Steps & Improvements",
        intro: "The AI identifies agreed-upon next steps and provides actionable improvement recommendations for \
                the sales representative.",
        bands: &[],
        groups: &[
            BulletGroup {
                heading: "Next Steps Analysis",
                accent: None,
                items: &[
                    "Extracts concrete action items like scheduled demos, follow-up calls, stakeholder meetings, \
                     proposal submissions, or trial sign-ups. Clear next steps indicate deal progression.",
                ],
            },
            BulletGroup {
                heading: "Improvement Recommendations",
                accent: None,
                items: &[
                    "AI suggests ONE specific, actionable improvement the representative should implement in their \
                     next call based on gaps identified in this conversation.",
                ],
            },
        ],
        note: None,
    },
    Metric {
        key: "company-accuracy",
        title: "Company Context Accuracy (0-100)",
        intro: "Measures how accurately the sales representative represented GrowthLens company information, \
                products, features, integrations, and capabilities during the call.",
        bands: &[
            ScoreBand { range: "90-100: Fully Accurate", rating: "Excellent", tone: Tone::Success },
            ScoreBand { range: "70-89: Mostly Accurate", rating: "Good", tone: Tone::Primary },
            ScoreBand { range: "50-69: Some Inaccuracies", rating: "Needs Review", tone: Tone::Warning },
            ScoreBand { range: "0-49: Major Misrepresentation", rating: "Critical", tone: Tone::Destructive },
        ],
        groups: &[BulletGroup {
            heading: "Verification Process:",
            accent: None,
            items: &[
                "AI cross-references claims against Company Knowledge Base",
                "Verifies feature capabilities, integrations, and pricing claims",
                "Flags exaggerations, unverified claims, or outdated information",
            ],
        }],
        note: None,
    },
    Metric {
        key: "project-accuracy",
        title: "Project Context Accuracy (0-100)",
        intro: "Evaluates accuracy of project-specific statements, implementation details, timelines, and technical \
                specifications mentioned during the call.",
        bands: &[
            ScoreBand { range: "90-100: Project Details Accurate", rating: "Excellent", tone: Tone::Success },
            ScoreBand { range: "70-89: Minor Contextual Gaps", rating: "Good", tone: Tone::Primary },
            ScoreBand { range: "50-69: Several Incorrect Facts", rating: "Requires Correction", tone: Tone::Warning },
            ScoreBand { range: "0-49: Major Factual Errors", rating: "Critical", tone: Tone::Destructive },
        ],
        groups: &[BulletGroup {
            heading: "What Gets Verified:",
            accent: None,
            items: &[
                "Project-specific integrations and technical capabilities",
                "Implementation timelines and resource requirements",
                "Custom features and project documentation claims",
                "ROI estimates and success metrics referenced",
            ],
        }],
        note: None,
    },
];

// =============================================================================
// EMBEDDINGS
// =============================================================================

pub const EMBEDDINGS_INTRO: &str = "Embeddings are AI-generated vector representations of text that capture \
     semantic meaning. Think of them as coordinates in a high-dimensional space where similar concepts are close \
     together.";

pub const EMBEDDINGS_EXAMPLE: &str = "For example, \"ATS software\" and \"applicant tracking system\" would have \
     embeddings very close together, even though the exact words are different. This enables smart semantic search.";

pub const KNOWLEDGE_SOURCES: &[KnowledgeSource] = &[
    KnowledgeSource {
        title: "Company Knowledge Base",
        body: "All company information and uploaded documents are converted into embeddings. When analyzing a call, \
               the AI searches for relevant company context to verify factual accuracy.",
        uses: &[
            "Verifies product features mentioned in call",
            "Checks pricing and plan details",
            "Confirms integration capabilities",
        ],
    },
    KnowledgeSource {
        title: "Project Knowledge Base",
        body: "Project-specific documents and metadata are embedded separately. The AI automatically discovers which \
               project is being discussed and retrieves relevant context.",
        uses: &[
            "Identifies mentioned projects from transcript",
            "Fetches project-specific details and documents",
            "Validates project claims made during call",
        ],
    },
    KnowledgeSource {
        title: "Call Transcript Embeddings",
        body: "Each transcript is embedded to enable semantic search across all your calls. Find similar \
               conversations, patterns, and insights even when exact keywords differ.",
        uses: &[],
    },
];

pub const TECH_DETAILS: &[(&str, &str)] = &[
    ("Embedding Model:", "Google Gemini text-embedding-004"),
    ("Vector Dimensions:", "768 dimensions"),
    ("Similarity Metric:", "Cosine similarity"),
    ("Search Method:", "Vector similarity search (PostgreSQL pgvector)"),
];

// =============================================================================
// WORKFLOW
// =============================================================================

pub const PIPELINE_STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Upload & Storage",
        description: "Audio file uploaded to secure Supabase Storage. System validates file format and size.",
        tech: Some("Supabase Storage, File validation"),
    },
    Step {
        number: 2,
        title: "Transcription",
        description: "If audio file provided, Google Gemini 2.0 Flash converts speech to text with speaker \
                      identification.",
        tech: Some("Google Gemini 2.0 Flash API, Audio transcription"),
    },
    Step {
        number: 3,
        title: "Context Discovery",
        description: "AI Agent searches Company Brain and Project embeddings to find relevant background \
                      information.",
        tech: Some("Vector similarity search, Supabase pgvector"),
    },
    Step {
        number: 4,
        title: "AI Analysis",
        description: "Google Gemini 2.5 Pro analyzes transcript with retrieved context. Evaluates sentiment, \
                      engagement, objections, confidence, and generates insights.",
        tech: Some("Google Gemini 2.5 Pro, n8n workflow orchestration"),
    },
    Step {
        number: 5,
        title: "Factual Verification",
        description: "AI cross-references claims made during call against Company and Project knowledge bases. \
                      Scores accuracy.",
        tech: Some("Semantic search, fact-checking algorithms"),
    },
    Step {
        number: 6,
        title: "Embedding Generation",
        description: "Transcript converted to semantic embeddings for future search and pattern analysis.",
        tech: Some("Google Gemini text-embedding-004"),
    },
    Step {
        number: 7,
        title: "Results Storage & Display",
        description: "All metrics, scores, and insights saved to database. Real-time dashboard updates with \
                      analysis results.",
        tech: Some("Supabase PostgreSQL, Real-time subscriptions"),
    },
];

pub const PROCESSING_TIMES: &[(&str, &str)] = &[
    ("30s", "Transcript Input"),
    ("2-3 min", "Short Audio (< 10 min)"),
    ("5-8 min", "Long Audio (> 20 min)"),
];

pub const BACKEND_INTRO: &str = "The entire analysis pipeline runs on n8n, a powerful workflow automation \
     platform. This enables complex multi-step processing with error handling, retries, and parallel execution.";

pub const BACKEND_POINTS: &[&str] = &[
    "Webhook-triggered execution on recording upload",
    "Parallel AI agent calls for company & project context",
    "Error handling with status updates to database",
    "Retry logic for failed API calls",
];

pub const CTA_TITLE: &str = "Ready to Transform Your Sales Calls?";
pub const CTA_BODY: &str = "Upload your first recording and see the AI-powered insights in action";
