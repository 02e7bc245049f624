//! Recommendation synthesis — deterministic rule evaluation over
//! computed indices, comparison results, and ROI projections.
//!
//! Every rule is evaluated independently and all matches are emitted
//! (no early exit), then sorted by priority descending (ties broken by
//! rule id for stable output) and truncated to the caller's maximum.
//! A fallback guarantees the list is never empty.

use serde::{Deserialize, Serialize};

use crate::indices::IndexReport;
use crate::roi::RoiResult;
use crate::scenario::ComparisonResult;

/// A ranked, human-readable action item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    /// Higher = more urgent.
    pub priority: u8,
    pub category: String,
    pub text: String,
}

/// Computed results a synthesis pass may draw on. Any subset may be
/// present; rules needing absent inputs simply do not fire.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationContext<'a> {
    pub indices: Option<&'a IndexReport>,
    pub comparison: Option<&'a ComparisonResult>,
    pub roi: Option<&'a RoiResult>,
}

impl<'a> RecommendationContext<'a> {
    fn index_score(&self, name: &str) -> Option<f64> {
        self.indices?
            .indices
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.overall_score)
    }
}

struct Rule {
    id: &'static str,
    priority: u8,
    category: &'static str,
    text: &'static str,
    applies: fn(&RecommendationContext) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        id: "negative-roi",
        priority: 95,
        category: "financial",
        text: "Projected return is negative. Redesign the scenario or reconsider the change before committing resources.",
        applies: |ctx| ctx.roi.is_some_and(|r| r.roi_pct < 0.0),
    },
    Rule {
        id: "structural-review",
        priority: 90,
        category: "structure",
        text: "Structural health is low. Conduct a full organizational design review covering spans, layers, and decision rights.",
        applies: |ctx| ctx.index_score("structural_complexity").is_some_and(|s| s < 0.40),
    },
    Rule {
        id: "strong-roi",
        priority: 85,
        category: "financial",
        text: "Projected ROI exceeds the 20% threshold. Proceed, with a realistic implementation plan and close progress monitoring.",
        applies: |ctx| ctx.roi.is_some_and(|r| r.roi_pct > 20.0),
    },
    Rule {
        id: "readiness-program",
        priority: 80,
        category: "readiness",
        text: "Change readiness is weak. Stand up sponsorship, communication, and training before structural changes land.",
        applies: |ctx| ctx.index_score("change_readiness").is_some_and(|s| s < 0.50),
    },
    Rule {
        id: "leadership-development",
        priority: 75,
        category: "leadership",
        text: "Leadership effectiveness scores below target. Invest in leadership development and clarify decision-making authority.",
        applies: |ctx| ctx.index_score("leadership_effectiveness").is_some_and(|s| s < 0.50),
    },
    Rule {
        id: "workforce-support",
        priority: 72,
        category: "workforce",
        text: "Significant workforce reduction planned. Implement transition support and redistribute workload deliberately.",
        applies: |ctx| {
            ctx.comparison
                .is_some_and(|c| c.summary.fte_impact.fte_change < -5.0)
        },
    },
    Rule {
        id: "culture-resilience",
        priority: 70,
        category: "culture",
        text: "Cultural resilience is low. Strengthen shared values and team cohesion before further disruption.",
        applies: |ctx| ctx.index_score("cultural_resilience").is_some_and(|s| s < 0.45),
    },
    Rule {
        id: "systemic-simplification",
        priority: 65,
        category: "structure",
        text: "Systemic complexity is elevated. Simplify cross-unit dependencies and shorten decision paths.",
        applies: |ctx| ctx.index_score("systemic_complexity").is_some_and(|s| s < 0.40),
    },
    Rule {
        id: "marginal-roi",
        priority: 60,
        category: "financial",
        text: "ROI is positive but marginal. Reduce implementation costs or raise efficiency targets before proceeding.",
        applies: |ctx| ctx.roi.is_some_and(|r| (0.0..10.0).contains(&r.roi_pct)),
    },
    Rule {
        id: "long-payback",
        priority: 55,
        category: "financial",
        text: "Payback exceeds three years. Accelerate benefit realization or phase the investment.",
        applies: |ctx| {
            ctx.roi
                .and_then(|r| r.payback_months)
                .is_some_and(|months| months > 36.0)
        },
    },
    Rule {
        id: "phased-implementation",
        priority: 50,
        category: "implementation",
        text: "Costs rise more than 10% against baseline. Phase the implementation to manage budget impact.",
        applies: |ctx| {
            ctx.comparison
                .is_some_and(|c| c.summary.cost_summary.percentage_change > 10.0)
        },
    },
    Rule {
        id: "role-change-training",
        priority: 48,
        category: "implementation",
        text: "Extensive role modifications planned. Pair them with comprehensive training and communication.",
        applies: |ctx| ctx.comparison.is_some_and(|c| c.summary.positions_modified > 10),
    },
];

fn fallback() -> Recommendation {
    Recommendation {
        id: "monitor".to_string(),
        priority: 10,
        category: "general".to_string(),
        text: "No acute findings. Maintain the current structure and re-assess after the next cycle."
            .to_string(),
    }
}

/// Evaluate all rules against the context and return the top
/// recommendations, at most `max` (at least one — the fallback fires
/// when nothing matches).
pub fn synthesize(ctx: &RecommendationContext, max: usize) -> Vec<Recommendation> {
    let mut matched: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| Recommendation {
            id: rule.id.to_string(),
            priority: rule.priority,
            category: rule.category.to_string(),
            text: rule.text.to_string(),
        })
        .collect();

    if matched.is_empty() {
        matched.push(fallback());
    }

    matched.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.id.cmp(&b.id)));
    matched.truncate(max.max(1));
    matched
}
