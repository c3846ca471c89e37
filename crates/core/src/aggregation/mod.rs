//! Aggregation engine
//!
//! Pure functions computing per-day and per-week nutrition totals and
//! goal-adherence metrics from collections of meals. Never touches storage.

mod service;

pub use service::{
    last_7_day_totals, macro_distribution, totals_by_category, totals_for_date, weekly_summary,
    DailyCalories, MacroDistribution, NutritionTotals, WeeklySummary,
};
