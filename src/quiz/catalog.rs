use std::fmt;

use rand::Rng;
use thiserror::Error;

use crate::quiz::{chemistry, math, physics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Area {
    #[serde(rename = "Matemáticas")]
    Math,
    #[serde(rename = "Física")]
    Physics,
    #[serde(rename = "Química")]
    Chemistry,
}

impl Area {
    pub const ALL: [Area; 3] = [Area::Math, Area::Physics, Area::Chemistry];

    pub fn label(&self) -> &'static str {
        match self {
            Area::Math => "Matemáticas",
            Area::Physics => "Física",
            Area::Chemistry => "Química",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Area::Math => "🧮",
            Area::Physics => "🧲",
            Area::Chemistry => "⚗️",
        }
    }

    /// Button caption used by the chat menu, e.g. "🧮 Matemáticas".
    pub fn button(&self) -> String {
        format!("{} {}", self.icon(), self.label())
    }

    /// Infers the area from a `"<Area>: <topic>"` label.
    /// Case and Spanish accents are ignored, so "fisica: ..." still matches.
    pub fn detect(label: &str) -> Option<Area> {
        let folded: String = label
            .trim_start()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'á' => 'a',
                'é' => 'e',
                'í' => 'i',
                'ó' => 'o',
                'ú' => 'u',
                other => other,
            })
            .collect();

        if folded.starts_with("matematicas") {
            Some(Area::Math)
        } else if folded.starts_with("fisica") {
            Some(Area::Physics)
        } else if folded.starts_with("quimica") {
            Some(Area::Chemistry)
        } else {
            None
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A worked example: the statement and its step-by-step solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub statement: String,
    pub solution: String,
}

/// A freshly generated numeric exercise. Every call to a topic's generator
/// may produce different values.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub statement: String,
    pub expected: f64,
    pub unit: String,
    pub hint: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub area: Area,
    pub name: &'static str,
    pub explain: fn() -> String,
    pub example: fn() -> Example,
    pub exercise: fn() -> Exercise,
}

impl Topic {
    pub fn explain(&self) -> String {
        (self.explain)()
    }

    pub fn example(&self) -> Example {
        (self.example)()
    }

    pub fn exercise(&self) -> Exercise {
        (self.exercise)()
    }

    /// Label handed to the AI helper, e.g. "Física: Ley de Ohm (V = I·R)".
    pub fn label(&self) -> String {
        format!("{}: {}", self.area, self.name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("a topic catalog needs at least one topic")]
    Empty,
}

/// The union of every subject's topics, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    pub fn new(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        if topics.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { topics })
    }

    pub fn standard() -> Self {
        let topics = math::TOPICS
            .iter()
            .chain(physics::TOPICS)
            .chain(chemistry::TOPICS)
            .copied()
            .collect();
        Self { topics }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn by_area(&self, area: Area) -> impl Iterator<Item = &Topic> + '_ {
        self.topics.iter().filter(move |t| t.area == area)
    }

    pub fn find(&self, area: Area, name: &str) -> Option<&Topic> {
        self.by_area(area).find(|t| t.name == name)
    }

    /// Uniform draw over all topics, with replacement.
    pub fn random_topic<R: Rng + ?Sized>(&self, rng: &mut R) -> &Topic {
        // Non-empty by construction
        &self.topics[rng.gen_range(0..self.topics.len())]
    }
}

/// Picks one of the preset values a content generator offers.
pub(crate) fn pick<T: Copy>(options: &[T]) -> T {
    options[rand::thread_rng().gen_range(0..options.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_every_area() {
        let catalog = Catalog::standard();
        for area in Area::ALL {
            assert_eq!(catalog.by_area(area).count(), 4, "{area}");
        }
        assert_eq!(catalog.topics().len(), 12);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn detect_area_from_label() {
        assert_eq!(Area::detect("Matemáticas: Pitágoras"), Some(Area::Math));
        assert_eq!(Area::detect("fisica: Ohm"), Some(Area::Physics));
        assert_eq!(Area::detect("QUÍMICA: Densidad"), Some(Area::Chemistry));
        assert_eq!(Area::detect("Historia: Roma"), None);
    }

    #[test]
    fn every_topic_generates_finite_exercises() {
        let catalog = Catalog::standard();
        for topic in catalog.topics() {
            for _ in 0..20 {
                let exercise = topic.exercise();
                assert!(exercise.expected.is_finite(), "{}", topic.name);
                assert!(!exercise.statement.is_empty());
                assert!(!exercise.hint.is_empty());
            }
            assert!(!topic.explain().is_empty());
            let example = topic.example();
            assert!(!example.statement.is_empty());
            assert!(!example.solution.is_empty());
        }
    }

    #[test]
    fn find_topic_by_area_and_name() {
        let catalog = Catalog::standard();
        let topic = catalog.find(Area::Physics, "Ley de Ohm (V = I·R)").unwrap();
        assert_eq!(topic.area, Area::Physics);
        assert_eq!(topic.label(), "Física: Ley de Ohm (V = I·R)");
        assert!(catalog.find(Area::Math, "Ley de Ohm (V = I·R)").is_none());
    }

    #[test]
    fn random_topic_stays_in_catalog() {
        let catalog = Catalog::standard();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let topic = catalog.random_topic(&mut rng);
            assert!(catalog.find(topic.area, topic.name).is_some());
        }
    }
}
