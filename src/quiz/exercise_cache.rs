use std::collections::HashMap;

use log::debug;

use crate::quiz::catalog::{Area, Topic};
use crate::quiz::GeneratedQuestion;

type TopicKey = (Area, &'static str);

/// Practice exercises shown outside the quiz, one per topic, kept until the
/// user asks for a new one or re-selects the topic.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCache {
    entries: HashMap<TopicKey, GeneratedQuestion>,
    selected: HashMap<Area, &'static str>,
}

fn key(topic: &Topic) -> TopicKey {
    (topic.area, topic.name)
}

impl ExerciseCache {
    /// Marks `topic` as the selection for its area. Switching to a different
    /// topic drops the cached exercise of the newly selected topic only.
    pub fn select(&mut self, topic: &Topic) {
        let previous = self.selected.insert(topic.area, topic.name);
        if previous != Some(topic.name) {
            self.invalidate(topic);
        }
    }

    pub fn get(&self, topic: &Topic) -> Option<&GeneratedQuestion> {
        self.entries.get(&key(topic))
    }

    pub fn get_or_create(&mut self, topic: &Topic) -> &GeneratedQuestion {
        self.entries.entry(key(topic)).or_insert_with(|| {
            debug!("generating practice exercise for {}", topic.label());
            GeneratedQuestion::generate(topic)
        })
    }

    pub fn invalidate(&mut self, topic: &Topic) {
        self.entries.remove(&key(topic));
    }

    /// "New exercise": drop the cached one and generate a replacement.
    pub fn regenerate(&mut self, topic: &Topic) -> &GeneratedQuestion {
        self.invalidate(topic);
        self.get_or_create(topic)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::quiz::catalog::{Example, Exercise};

    static CALLS: AtomicU32 = AtomicU32::new(0);

    fn counting_exercise() -> Exercise {
        let n = CALLS.fetch_add(1, Ordering::SeqCst);
        Exercise {
            statement: format!("Ejercicio #{n}"),
            expected: f64::from(n),
            unit: String::new(),
            hint: String::new(),
        }
    }

    fn no_explain() -> String {
        String::new()
    }

    fn no_example() -> Example {
        Example {
            statement: String::new(),
            solution: String::new(),
        }
    }

    fn topic(area: Area, name: &'static str) -> Topic {
        Topic {
            area,
            name,
            explain: no_explain,
            example: no_example,
            exercise: counting_exercise,
        }
    }

    #[test]
    fn cached_question_is_reused() {
        let mut cache = ExerciseCache::default();
        let linear = topic(Area::Math, "Lineal");

        assert!(cache.get(&linear).is_none());
        let first = cache.get_or_create(&linear).clone();
        let second = cache.get_or_create(&linear).clone();
        assert_eq!(first, second);
        assert_eq!(cache.get(&linear), Some(&first));
    }

    #[test]
    fn invalidate_only_touches_one_topic() {
        let mut cache = ExerciseCache::default();
        let linear = topic(Area::Math, "Lineal");
        let slope = topic(Area::Math, "Pendiente");

        let kept = cache.get_or_create(&slope).clone();
        let dropped = cache.get_or_create(&linear).clone();
        cache.invalidate(&linear);

        assert!(cache.get(&linear).is_none());
        assert_eq!(cache.get(&slope), Some(&kept));
        assert_ne!(cache.get_or_create(&linear).expected, dropped.expected);
    }

    #[test]
    fn regenerate_replaces_question() {
        let mut cache = ExerciseCache::default();
        let ohm = topic(Area::Physics, "Ohm");

        let old = cache.get_or_create(&ohm).clone();
        let new = cache.regenerate(&ohm).clone();
        assert_ne!(old.expected, new.expected);
        assert_eq!(cache.get(&ohm), Some(&new));
    }

    #[test]
    fn changing_selection_refreshes_selected_topic() {
        let mut cache = ExerciseCache::default();
        let molarity = topic(Area::Chemistry, "Molaridad");
        let density = topic(Area::Chemistry, "Densidad");
        let velocity = topic(Area::Physics, "Velocidad");

        cache.select(&molarity);
        let molarity_question = cache.get_or_create(&molarity).clone();
        let velocity_question = cache.get_or_create(&velocity).clone();

        // Re-selecting the same topic keeps its exercise
        cache.select(&molarity);
        assert_eq!(cache.get(&molarity), Some(&molarity_question));

        cache.select(&density);
        cache.get_or_create(&density);
        cache.select(&molarity);
        assert!(cache.get(&molarity).is_none());
        assert!(cache.get(&density).is_some());
        assert_eq!(cache.get(&velocity), Some(&velocity_question));
    }
}
