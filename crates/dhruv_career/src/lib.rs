//! Career-strength analysis over Vedic charts.
//!
//! This crate provides:
//! - A registry of career rules over the D1, D9 and D10 charts, folded
//!   into a [`CareerVerdict`] with a per-rule checklist
//! - Rule categories and score interpretation
//! - A profession classifier over ten modern categories
//! - An explicit cache client with an in-memory backend
//! - TOML configuration and the end-to-end [`analyze`] pipeline
//!
//! Chart math lives in `dhruv_vedic_base`; nothing here computes
//! positions.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod error;
pub mod profession;
pub mod rules;
pub mod score;

pub use analysis::{AnalysisRequest, CareerReport, analyze, analyze_cached};
pub use cache::{CacheClient, CacheStats, CareerCache, MemoryCache};
pub use config::CareerConfig;
pub use error::CareerError;
pub use profession::{
    ProfessionScore, ProfessionStrength, ProfessionSummary, profession_probabilities,
    profession_summary,
};
pub use rules::{
    CareerRule, CareerStrength, CareerVerdict, CategoryGroup, ChecklistEntry, RuleCategory,
    RuleContext, RuleOutcome, RuleRecord, build_checklist, default_rules, evaluate, evaluate_with,
    group_by_category,
};
pub use score::{ScoreStrength, score_strength};
