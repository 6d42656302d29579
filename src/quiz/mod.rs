pub mod ai_helper;
pub mod catalog;
pub mod chemistry;
pub mod exercise_cache;
pub mod grading;
pub mod history;
pub mod math;
pub mod physics;
pub mod session;

use catalog::{Area, Topic};

/// An exercise frozen at generation time. Its expected value never changes
/// while the question is on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedQuestion {
    pub area: Area,
    pub topic: String,
    pub statement: String,
    pub expected: f64,
    pub unit: String,
    pub hint: String,
}

impl GeneratedQuestion {
    /// Calls the topic's generator once and keeps the result.
    pub fn generate(topic: &Topic) -> Self {
        let exercise = topic.exercise();
        Self {
            area: topic.area,
            topic: topic.name.to_string(),
            statement: exercise.statement,
            expected: exercise.expected,
            unit: exercise.unit,
            hint: exercise.hint,
        }
    }

    /// "4.000000 A", or just the number for unitless answers.
    pub fn solution(&self) -> String {
        if self.unit.is_empty() {
            format!("{:.6}", self.expected)
        } else {
            format!("{:.6} {}", self.expected, self.unit)
        }
    }
}
