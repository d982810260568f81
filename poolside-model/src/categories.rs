//! Closed category vocabularies used by the filter dimensions.
//!
//! The API stores categories as free-form nullable strings; the admin UI only
//! ever writes the values below. `api_name` returns the exact wire spelling,
//! accents included.

use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCategory {
    Aero1,
    Vitesse,
    Mixte,
    Technique,
    Recuperation,
}

impl WorkoutCategory {
    pub fn all() -> &'static [WorkoutCategory] {
        use WorkoutCategory::*;
        &[Aero1, Vitesse, Mixte, Technique, Recuperation]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            WorkoutCategory::Aero1 => "Aero 1",
            WorkoutCategory::Vitesse => "Vitesse",
            WorkoutCategory::Mixte => "Mixte",
            WorkoutCategory::Technique => "Technique",
            WorkoutCategory::Recuperation => "Récupération",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for WorkoutCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutCategory::all()
            .iter()
            .find(|c| c.api_name() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// Difficulty level of a training plan (`plan_category` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanLevel {
    Debutant,
    Intermediaire,
    Avance,
}

impl PlanLevel {
    pub fn all() -> &'static [PlanLevel] {
        use PlanLevel::*;
        &[Debutant, Intermediaire, Avance]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            PlanLevel::Debutant => "Débutant",
            PlanLevel::Intermediaire => "Intermédiaire",
            PlanLevel::Avance => "Avancé",
        }
    }
}

impl fmt::Display for PlanLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for PlanLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanLevel::all()
            .iter()
            .find(|c| c.api_name() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseCategory {
    CorrectifDeNage,
    CorrectifDeStyle,
    TravailDeBase,
}

impl ExerciseCategory {
    pub fn all() -> &'static [ExerciseCategory] {
        use ExerciseCategory::*;
        &[CorrectifDeNage, CorrectifDeStyle, TravailDeBase]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            ExerciseCategory::CorrectifDeNage => "Correctif De Nage",
            ExerciseCategory::CorrectifDeStyle => "Correctif De Style",
            ExerciseCategory::TravailDeBase => "Travail de Base",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for ExerciseCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExerciseCategory::all()
            .iter()
            .find(|c| c.api_name() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// Swimmer level an exercise targets. Same vocabulary as [`PlanLevel`] but a
/// distinct wire field (`exercise_level`), so it stays a distinct type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseLevel {
    Debutant,
    Intermediaire,
    Avance,
}

impl ExerciseLevel {
    pub fn all() -> &'static [ExerciseLevel] {
        use ExerciseLevel::*;
        &[Debutant, Intermediaire, Avance]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            ExerciseLevel::Debutant => "Débutant",
            ExerciseLevel::Intermediaire => "Intermédiaire",
            ExerciseLevel::Avance => "Avancé",
        }
    }
}

impl fmt::Display for ExerciseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for ExerciseLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExerciseLevel::all()
            .iter()
            .find(|c| c.api_name() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}
