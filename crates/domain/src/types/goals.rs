//! Daily nutrition targets

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALORIES_GOAL, DEFAULT_CARBS_GOAL, DEFAULT_FAT_GOAL, DEFAULT_PROTEIN_GOAL,
};

/// A user's daily nutrition targets.
///
/// Every user has goals; users who never customized them get the defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyGoals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIES_GOAL,
            protein: DEFAULT_PROTEIN_GOAL,
            carbs: DEFAULT_CARBS_GOAL,
            fat: DEFAULT_FAT_GOAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_uncustomized_profile() {
        let goals = DailyGoals::default();
        assert_eq!(goals.calories, 2000);
        assert_eq!(goals.protein, 150);
        assert_eq!(goals.carbs, 200);
        assert_eq!(goals.fat, 65);
    }
}
