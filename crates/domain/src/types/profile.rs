//! User profile types
//!
//! Biometric and goal-setting attributes owned one-to-one by an
//! authenticated user. Created implicitly at sign-up, updated via explicit
//! save.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Habitual activity level used for goal guidance
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    Athlete,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Lose,
    #[default]
    Maintain,
    Gain,
}

/// User profile stored alongside the daily goals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    /// Kilograms
    pub weight: Option<f64>,
    /// Centimeters
    pub height: Option<f64>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub activity_level: ActivityLevel,
    pub goal_type: GoalType,
    /// Kilograms
    pub target_weight: Option<f64>,
    pub avatar_ref: Option<String>,
    pub updated_at: i64,
}

impl Profile {
    /// Empty profile created implicitly at sign-up.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>, now: i64) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            weight: None,
            height: None,
            birth_date: None,
            gender: None,
            activity_level: ActivityLevel::default(),
            goal_type: GoalType::default(),
            target_weight: None,
            avatar_ref: None,
            updated_at: now,
        }
    }
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
}

impl ProfileUpdate {
    /// Apply this update on top of an existing profile, stamping `updated_at`.
    pub fn apply_to(&self, profile: &Profile, now: i64) -> Profile {
        Profile {
            user_id: profile.user_id.clone(),
            name: self.name.clone().unwrap_or_else(|| profile.name.clone()),
            weight: self.weight.or(profile.weight),
            height: self.height.or(profile.height),
            birth_date: self.birth_date.or(profile.birth_date),
            gender: self.gender.or(profile.gender),
            activity_level: self.activity_level.unwrap_or(profile.activity_level),
            goal_type: self.goal_type.unwrap_or(profile.goal_type),
            target_weight: self.target_weight.or(profile.target_weight),
            avatar_ref: self.avatar_ref.clone().or_else(|| profile.avatar_ref.clone()),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_uses_defaults() {
        let profile = Profile::new("user-1", "Ana", 1_700_000_000);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal_type, GoalType::Maintain);
        assert!(profile.weight.is_none());
    }

    #[test]
    fn update_stamps_timestamp_and_merges() {
        let profile = Profile::new("user-1", "Ana", 1_700_000_000);
        let update = ProfileUpdate {
            weight: Some(72.5),
            goal_type: Some(GoalType::Lose),
            ..ProfileUpdate::default()
        };

        let updated = update.apply_to(&profile, 1_700_000_100);

        assert_eq!(updated.weight, Some(72.5));
        assert_eq!(updated.goal_type, GoalType::Lose);
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.updated_at, 1_700_000_100);
    }

    #[test]
    fn activity_level_serializes_snake_case() {
        let json = serde_json::to_string(&ActivityLevel::Sedentary).expect("serializes");
        assert_eq!(json, r#""sedentary""#);
    }
}
