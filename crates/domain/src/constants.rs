//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Meal validation limits
pub const MAX_MEAL_CALORIES: u32 = 9999;
pub const MAX_MACRO_GRAMS: u32 = 999;

// Default daily goals for users who have not customized them
pub const DEFAULT_CALORIES_GOAL: u32 = 2000;
pub const DEFAULT_PROTEIN_GOAL: u32 = 150;
pub const DEFAULT_CARBS_GOAL: u32 = 200;
pub const DEFAULT_FAT_GOAL: u32 = 65;

// Goal adherence window: a day is on goal within [0.8, 1.2] of the target
pub const GOAL_WINDOW_LOWER: f64 = 0.8;
pub const GOAL_WINDOW_UPPER: f64 = 1.2;

// Session configuration
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

// AI analysis configuration
pub const DEFAULT_AI_MODEL: &str = "gemini-2.5-flash";
pub const INGREDIENT_JOIN_SEPARATOR: &str = ", ";
