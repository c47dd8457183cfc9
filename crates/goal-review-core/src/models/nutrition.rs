// ABOUTME: Nutrition models for goal reviews: goals, logged food, daily totals, goal deltas
// ABOUTME: NutritionGoals, GoalField, MacroTotals, FoodLogEntry, DailyTotal, and GoalDelta definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Goal axis a recommendation may adjust
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum GoalField {
    /// Daily energy target (kcal)
    Calories,
    /// Daily protein target (grams)
    Protein,
    /// Daily carbohydrate target (grams)
    Carbs,
    /// Daily fat target (grams)
    Fat,
}

impl GoalField {
    /// Every goal axis, in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// Field name as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }
}

impl fmt::Display for GoalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily nutrition targets owned by the caller.
///
/// Calories in kcal, macros in grams. The engine never mutates a caller's goals;
/// suggested goals are always a fresh copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionGoals {
    /// Daily calorie target (kcal)
    pub calories: f64,
    /// Daily protein target (grams)
    pub protein: f64,
    /// Daily carbohydrate target (grams)
    pub carbs: f64,
    /// Daily fat target (grams)
    pub fat: f64,
}

impl NutritionGoals {
    /// Create a goal snapshot
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Target value for one axis
    #[must_use]
    pub const fn get(&self, field: GoalField) -> f64 {
        match field {
            GoalField::Calories => self.calories,
            GoalField::Protein => self.protein,
            GoalField::Carbs => self.carbs,
            GoalField::Fat => self.fat,
        }
    }

    /// Copy of these goals with `delta` added to every field it names
    #[must_use]
    pub fn with_delta(&self, delta: &GoalDelta) -> Self {
        let mut goals = *self;
        for (field, change) in delta.iter() {
            match field {
                GoalField::Calories => goals.calories += change,
                GoalField::Protein => goals.protein += change,
                GoalField::Carbs => goals.carbs += change,
                GoalField::Fat => goals.fat += change,
            }
        }
        goals
    }

    /// Goal axes whose target is zero or not a usable number
    #[must_use]
    pub fn unset_fields(&self) -> Vec<GoalField> {
        GoalField::ALL
            .into_iter()
            .filter(|field| {
                let value = self.get(*field);
                !value.is_finite() || value <= 0.0
            })
            .collect()
    }
}

/// Calorie and macro amounts, used for daily sums and period averages
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbs: f64,
    /// Fat (grams)
    pub fat: f64,
}

impl MacroTotals {
    /// Amount for one axis
    #[must_use]
    pub const fn get(&self, field: GoalField) -> f64 {
        match field {
            GoalField::Calories => self.calories,
            GoalField::Protein => self.protein,
            GoalField::Carbs => self.carbs,
            GoalField::Fat => self.fat,
        }
    }

    /// Add one logged entry, scaled by its counted servings
    pub fn add_entry(&mut self, entry: &FoodLogEntry) {
        let servings = entry.counted_servings();
        self.calories += entry.calories * servings;
        self.protein += entry.protein * servings;
        self.carbs += entry.carbs * servings;
        self.fat += entry.fat * servings;
    }

    /// Add another set of totals
    pub fn accumulate(&mut self, other: &Self) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }

    /// Divide every axis by `divisor`; a zero divisor yields all-zero totals
    #[must_use]
    pub fn divided_by(&self, divisor: f64) -> Self {
        if divisor <= 0.0 {
            return Self::default();
        }
        Self {
            calories: self.calories / divisor,
            protein: self.protein / divisor,
            carbs: self.carbs / divisor,
            fat: self.fat / divisor,
        }
    }
}

/// One logged consumption event, nutrient values are per serving
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
    /// When the food was logged
    pub logged_at_timestamp: DateTime<Utc>,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein: f64,
    /// Carbohydrates per serving (grams)
    pub carbs: f64,
    /// Fat per serving (grams)
    pub fat: f64,
    /// Number of servings consumed
    #[serde(default = "default_servings")]
    pub servings: f64,
}

const fn default_servings() -> f64 {
    1.0
}

impl FoodLogEntry {
    /// Single-serving entry
    #[must_use]
    pub const fn new(
        logged_at_timestamp: DateTime<Utc>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Self {
        Self {
            logged_at_timestamp,
            calories,
            protein,
            carbs,
            fat,
            servings: 1.0,
        }
    }

    /// Set the number of servings
    #[must_use]
    pub fn with_servings(mut self, servings: f64) -> Self {
        self.servings = servings;
        self
    }

    /// Servings counted toward totals; negative or NaN servings count as zero
    #[must_use]
    pub fn counted_servings(&self) -> f64 {
        self.servings.max(0.0)
    }

    /// Whether the logged servings had to be clamped
    #[must_use]
    pub fn has_invalid_servings(&self) -> bool {
        self.servings.is_nan() || self.servings < 0.0
    }

    /// Calendar day (UTC) the entry belongs to
    #[must_use]
    pub fn log_date(&self) -> NaiveDate {
        self.logged_at_timestamp.date_naive()
    }
}

/// Sum of all entries logged on one calendar day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    /// Calendar day
    pub date: NaiveDate,
    /// Servings-scaled sums for the day
    #[serde(flatten)]
    pub totals: MacroTotals,
    /// Number of entries merged into this day
    pub entry_count: u32,
}

impl DailyTotal {
    /// Empty total for `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            totals: MacroTotals::default(),
            entry_count: 0,
        }
    }

    /// Merge one entry into the day
    pub fn add(&mut self, entry: &FoodLogEntry) {
        self.totals.add_entry(entry);
        self.entry_count = self.entry_count.saturating_add(1);
    }
}

/// Sparse set of changes to goal fields.
///
/// Only the four goal axes can appear, so a delta can never introduce a field
/// the current goals do not have.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalDelta {
    /// Change to the calorie target
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub calories: Option<f64>,
    /// Change to the protein target
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub protein: Option<f64>,
    /// Change to the carbohydrate target
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub carbs: Option<f64>,
    /// Change to the fat target
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fat: Option<f64>,
}

impl GoalDelta {
    /// Delta touching a single field
    #[must_use]
    pub fn single(field: GoalField, change: f64) -> Self {
        let mut delta = Self::default();
        delta.set(field, change);
        delta
    }

    /// Change recorded for `field`, if any
    #[must_use]
    pub const fn get(&self, field: GoalField) -> Option<f64> {
        match field {
            GoalField::Calories => self.calories,
            GoalField::Protein => self.protein,
            GoalField::Carbs => self.carbs,
            GoalField::Fat => self.fat,
        }
    }

    /// Record a change for `field`, replacing any previous one
    pub fn set(&mut self, field: GoalField, change: f64) {
        let slot = match field {
            GoalField::Calories => &mut self.calories,
            GoalField::Protein => &mut self.protein,
            GoalField::Carbs => &mut self.carbs,
            GoalField::Fat => &mut self.fat,
        };
        *slot = Some(change);
    }

    /// Sum another delta into this one, field by field
    pub fn merge(&mut self, other: &Self) {
        for (field, change) in other.iter() {
            let total = self.get(field).unwrap_or(0.0) + change;
            self.set(field, total);
        }
    }

    /// Iterate over the fields this delta changes
    pub fn iter(&self) -> impl Iterator<Item = (GoalField, f64)> + '_ {
        GoalField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|change| (field, change)))
    }

    /// True when no field is changed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
