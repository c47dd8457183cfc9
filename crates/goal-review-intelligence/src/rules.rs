// ABOUTME: Recommendation generator built from independent, pure goal adjustment rules
// ABOUTME: Rules read adherence and trend signals; their deltas are folded into suggested goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal adjustment rules
//!
//! Each rule is a plain function `(&RuleContext) -> Option<RuleOutcome>`. Rules
//! never see each other's output: the generator evaluates all of them against the
//! same context and folds the resulting deltas left to right into the suggested
//! goals. Recommendation order is rule order, not priority order.
//!
//! No rule fires without at least one logged day, and no rule proposes a change
//! that rounds away to nothing.

use crate::adherence::AdherenceMetrics;
use crate::config::RecommendationRulesConfig;
use chrono::{DateTime, Utc};
use goal_review_core::constants::energy::DAYS_PER_WEEK;
use goal_review_core::models::{
    GoalDelta, GoalField, Implementation, MacroTotals, NutritionGoals, Recommendation,
    RecommendationImpact, RecommendationPriority, RecommendationType, ReviewPeriod,
    TrendDirection, WeightGoal,
};
use tracing::debug;

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Capped adherence percentages
    pub metrics: &'a AdherenceMetrics,
    /// Mean daily intake over logged days
    pub averages: &'a MacroTotals,
    /// Goals in effect during the period
    pub current_goals: &'a NutritionGoals,
    /// Stated weight objective
    pub stated_goal: WeightGoal,
    /// Weight trend relative to the objective
    pub trend: TrendDirection,
    /// Last minus first weight in the window
    pub weight_progress: f64,
    /// Weight entries inside the window
    pub weight_entries: usize,
    /// Percentage of days logged
    pub consistency_score: f64,
    /// Distinct days with entries
    pub days_logged: usize,
    /// Review period
    pub period: ReviewPeriod,
    /// Thresholds and factors
    pub config: &'a RecommendationRulesConfig,
}

/// What a rule proposes when it fires
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// Recommendation category
    pub recommendation_type: RecommendationType,
    /// Urgency
    pub priority: RecommendationPriority,
    /// Short headline
    pub title: String,
    /// What to change
    pub description: String,
    /// Why, with the measured numbers
    pub rationale: String,
    /// Expected result
    pub expected_outcome: String,
    /// Steps and metrics
    pub implementation: Implementation,
    /// Goal changes
    pub delta: GoalDelta,
    /// Projected weekly weight change
    pub expected_weight_change: Option<f64>,
}

impl RuleOutcome {
    /// Attach an identifier and turn the outcome into a recommendation
    #[must_use]
    pub fn into_recommendation(self, id: String) -> Recommendation {
        Recommendation {
            id,
            recommendation_type: self.recommendation_type,
            priority: self.priority,
            title: self.title,
            description: self.description,
            rationale: self.rationale,
            expected_outcome: self.expected_outcome,
            implementation: self.implementation,
            impact: RecommendationImpact {
                changes: self.delta,
                expected_weight_change: self.expected_weight_change,
            },
        }
    }
}

/// A goal adjustment rule
pub type GoalRule = fn(&RuleContext<'_>) -> Option<RuleOutcome>;

/// Built-in rules in evaluation order
pub const DEFAULT_RULES: &[GoalRule] = &[
    calorie_reduction_rule,
    protein_increase_rule,
    calorie_increase_rule,
    carb_rebalance_rule,
    fat_rebalance_rule,
    logging_consistency_rule,
];

/// Output of one generation pass
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet {
    /// Recommendations in rule order
    pub recommendations: Vec<Recommendation>,
    /// Current goals with every delta applied
    pub suggested_goals: NutritionGoals,
}

/// Recommendation identifier: rule type, generation time, and position
#[must_use]
pub fn recommendation_id(
    recommendation_type: RecommendationType,
    generated_at: DateTime<Utc>,
    index: usize,
) -> String {
    format!(
        "{}_{}_{index}",
        recommendation_type.as_str(),
        generated_at.timestamp_millis()
    )
}

/// Evaluate `rules` in order and fold their deltas into the suggested goals
#[must_use]
pub fn generate_recommendations(
    context: &RuleContext<'_>,
    rules: &[GoalRule],
    generated_at: DateTime<Utc>,
) -> RecommendationSet {
    let (recommendations, total_delta) = rules
        .iter()
        .filter_map(|rule| rule(context))
        .enumerate()
        .fold(
            (Vec::new(), GoalDelta::default()),
            |(mut recommendations, mut total), (index, outcome)| {
                debug!(
                    rule = %outcome.recommendation_type,
                    priority = ?outcome.priority,
                    delta = ?outcome.delta,
                    "Goal rule fired"
                );
                total.merge(&outcome.delta);
                let id = recommendation_id(outcome.recommendation_type, generated_at, index);
                recommendations.push(outcome.into_recommendation(id));
                (recommendations, total)
            },
        );

    RecommendationSet {
        recommendations,
        suggested_goals: context.current_goals.with_delta(&total_delta),
    }
}

/// Projected weekly weight change for a daily calorie change
fn weekly_weight_change(calorie_delta: f64, kcal_per_kg: f64) -> f64 {
    let change = calorie_delta * DAYS_PER_WEEK / kcal_per_kg;
    (change * 100.0).round() / 100.0
}

/// Rules need evidence and a usable target on the axis they adjust
fn has_evidence(context: &RuleContext<'_>, field: GoalField) -> bool {
    let target = context.current_goals.get(field);
    context.days_logged > 0 && target.is_finite() && target > 0.0
}

/// Weight-loss users eating well under target get a 5% lower, more sustainable target
#[must_use]
pub fn calorie_reduction_rule(context: &RuleContext<'_>) -> Option<RuleOutcome> {
    let threshold = context.config.thresholds.low_calorie_adherence;
    if context.stated_goal != WeightGoal::Lose
        || !has_evidence(context, GoalField::Calories)
        || context.metrics.calories >= threshold
    {
        return None;
    }

    let current = context.current_goals.calories;
    let suggested = (current * context.config.factors.calorie_reduction).round();
    if suggested >= current.round() {
        return None;
    }
    let delta = suggested - current;

    Some(RuleOutcome {
        recommendation_type: RecommendationType::CalorieAdjustment,
        priority: RecommendationPriority::High,
        title: "Adjust Calorie Target".into(),
        description: format!(
            "Lower your daily calorie target from {current:.0} to {suggested:.0} kcal so it matches what you can sustain."
        ),
        rationale: format!(
            "You averaged {:.0} kcal/day, {:.0}% of your {current:.0} kcal goal. A target closer to your actual intake is easier to hit consistently.",
            context.averages.calories, context.metrics.calories
        ),
        expected_outcome: "Steadier adherence while keeping a calorie deficit for weight loss"
            .into(),
        implementation: Implementation {
            timeframe: "2-3 weeks".into(),
            steps: vec![
                format!("Set your daily calorie goal to {suggested:.0} kcal"),
                "Plan meals ahead to reach the new target".into(),
                "Log every meal, including snacks".into(),
            ],
            metrics: vec!["Daily calorie intake".into(), "Weekly weight change".into()],
        },
        delta: GoalDelta::single(GoalField::Calories, delta),
        expected_weight_change: Some(weekly_weight_change(
            delta,
            context.config.factors.kcal_per_kg,
        )),
    })
}

/// Protein under 70% of target raises the protein goal by 10%
#[must_use]
pub fn protein_increase_rule(context: &RuleContext<'_>) -> Option<RuleOutcome> {
    let threshold = context.config.thresholds.low_protein_adherence;
    if !has_evidence(context, GoalField::Protein) || context.metrics.protein >= threshold {
        return None;
    }

    let current = context.current_goals.protein;
    let increase = (current * context.config.factors.protein_increase).round();
    if increase < 1.0 {
        return None;
    }
    let suggested = current + increase;

    Some(RuleOutcome {
        recommendation_type: RecommendationType::MacroRebalance,
        priority: RecommendationPriority::Medium,
        title: "Increase Protein Intake".into(),
        description: format!(
            "Raise your daily protein target from {current:.0} g to {suggested:.0} g."
        ),
        rationale: format!(
            "You averaged {:.0} g protein/day, {:.0}% of your {current:.0} g goal. Adequate protein preserves lean mass and improves satiety.",
            context.averages.protein, context.metrics.protein
        ),
        expected_outcome: "Better satiety and lean mass retention".into(),
        implementation: Implementation {
            timeframe: "1-2 weeks".into(),
            steps: vec![
                "Include a protein source with every meal".into(),
                "Swap one snack for a high-protein option".into(),
                format!("Track protein daily toward {suggested:.0} g"),
            ],
            metrics: vec!["Daily protein intake".into(), "Hunger between meals".into()],
        },
        delta: GoalDelta::single(GoalField::Protein, increase),
        expected_weight_change: None,
    })
}

/// Weight-gain users eating on target without gaining get 5% more calories.
///
/// A stall needs at least two weigh-ins in the window to be observed at all.
#[must_use]
pub fn calorie_increase_rule(context: &RuleContext<'_>) -> Option<RuleOutcome> {
    let threshold = context.config.thresholds.gain_stall_calorie_adherence;
    if context.stated_goal != WeightGoal::Gain
        || !has_evidence(context, GoalField::Calories)
        || context.weight_entries < 2
        || context.metrics.calories < threshold
        || context.trend == TrendDirection::Improving
    {
        return None;
    }

    let current = context.current_goals.calories;
    let increase = (current * context.config.factors.calorie_increase).round();
    if increase < 1.0 {
        return None;
    }
    let suggested = current + increase;

    Some(RuleOutcome {
        recommendation_type: RecommendationType::CalorieAdjustment,
        priority: RecommendationPriority::Medium,
        title: "Increase Calorie Target".into(),
        description: format!(
            "Raise your daily calorie target from {current:.0} to {suggested:.0} kcal."
        ),
        rationale: format!(
            "You met {:.0}% of your calorie goal but your weight changed by {:+.1} over the {} period, so the current target is not producing a surplus.",
            context.metrics.calories, context.weight_progress, context.period
        ),
        expected_outcome: "A consistent calorie surplus supporting weight gain".into(),
        implementation: Implementation {
            timeframe: "2-4 weeks".into(),
            steps: vec![
                format!("Set your daily calorie goal to {suggested:.0} kcal"),
                "Add an energy-dense snack such as nuts or a smoothie".into(),
                "Weigh in at the same time each week".into(),
            ],
            metrics: vec!["Daily calorie intake".into(), "Weekly weight change".into()],
        },
        delta: GoalDelta::single(GoalField::Calories, increase),
        expected_weight_change: Some(weekly_weight_change(
            increase,
            context.config.factors.kcal_per_kg,
        )),
    })
}

/// Shared body of the carb and fat over-consumption rules
fn macro_rebalance(
    context: &RuleContext<'_>,
    field: GoalField,
    label: &str,
) -> Option<RuleOutcome> {
    let adherence = context.metrics.get(field);
    let threshold = context.config.thresholds.macro_overconsumption;
    if !has_evidence(context, field) || adherence <= threshold {
        return None;
    }

    let current = context.current_goals.get(field);
    let reduction = (current * context.config.factors.macro_reduction).round();
    if reduction < 1.0 {
        return None;
    }
    let suggested = current - reduction;

    Some(RuleOutcome {
        recommendation_type: RecommendationType::MacroRebalance,
        priority: RecommendationPriority::Low,
        title: format!("Rebalance {label} Intake"),
        description: format!(
            "Lower your daily {} target from {current:.0} g to {suggested:.0} g and shift those calories toward protein.",
            label.to_lowercase()
        ),
        rationale: format!(
            "You averaged {:.0} g {}/day, {adherence:.0}% of your {current:.0} g goal.",
            context.averages.get(field),
            label.to_lowercase()
        ),
        expected_outcome: "A macro split closer to your targets".into(),
        implementation: Implementation {
            timeframe: "2-3 weeks".into(),
            steps: vec![
                format!("Review the foods contributing most of your {}", label.to_lowercase()),
                "Replace one of them with a lower-calorie alternative".into(),
                format!("Track {} daily toward {suggested:.0} g", label.to_lowercase()),
            ],
            metrics: vec![format!("Daily {} intake", label.to_lowercase())],
        },
        delta: GoalDelta::single(field, -reduction),
        expected_weight_change: None,
    })
}

/// Carbs above 120% of target lower the carb goal by 10%
#[must_use]
pub fn carb_rebalance_rule(context: &RuleContext<'_>) -> Option<RuleOutcome> {
    macro_rebalance(context, GoalField::Carbs, "Carbohydrate")
}

/// Fat above 120% of target lowers the fat goal by 10%
#[must_use]
pub fn fat_rebalance_rule(context: &RuleContext<'_>) -> Option<RuleOutcome> {
    macro_rebalance(context, GoalField::Fat, "Fat")
}

/// Sparse logging gets a reminder, goals are left alone
#[must_use]
pub fn logging_consistency_rule(context: &RuleContext<'_>) -> Option<RuleOutcome> {
    let threshold = context.config.thresholds.low_consistency_score;
    if context.days_logged == 0 || context.consistency_score >= threshold {
        return None;
    }

    Some(RuleOutcome {
        recommendation_type: RecommendationType::Consistency,
        priority: RecommendationPriority::Low,
        title: "Log Meals More Consistently".into(),
        description: "Log your food on more days so reviews reflect your real intake.".into(),
        rationale: format!(
            "You logged food on {} of the last {} days ({:.0}% consistency).",
            context.days_logged,
            context.period.days(),
            context.consistency_score
        ),
        expected_outcome: "More accurate adherence scores and better-targeted adjustments".into(),
        implementation: Implementation {
            timeframe: "1 week".into(),
            steps: vec![
                "Set a daily reminder to log meals".into(),
                "Log meals right after eating".into(),
            ],
            metrics: vec!["Days logged per week".into()],
        },
        delta: GoalDelta::default(),
        expected_weight_change: None,
    })
}
