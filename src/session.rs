use rand::Rng;

use crate::config::Settings;
use crate::quiz::catalog::{Catalog, Topic};
use crate::quiz::exercise_cache::ExerciseCache;
use crate::quiz::grading::within_tolerance;
use crate::quiz::history::{AttemptKind, HistoryLedger};
use crate::quiz::session::{QuizSession, SubmitOutcome};
use crate::quiz::GeneratedQuestion;

/// Everything one chat owns. Nothing here is shared between chats.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub settings: Settings,
    pub quiz: QuizSession,
    pub history: HistoryLedger,
    pub exercises: ExerciseCache,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PracticeResult {
    pub question: GeneratedQuestion,
    pub correct: bool,
}

impl Session {
    /// Grades the practice exercise currently cached for `topic` and logs it.
    /// Returns `None` when no exercise has been shown for that topic.
    pub fn grade_exercise(&mut self, topic: &Topic, user_value: f64) -> Option<PracticeResult> {
        let question = self.exercises.get(topic)?.clone();
        let correct = within_tolerance(
            question.expected,
            user_value,
            self.settings.tolerance_fraction(),
        );
        self.history.record(
            question.area,
            &question.topic,
            AttemptKind::Exercise,
            question.expected,
            user_value,
            correct,
        );
        Some(PracticeResult { question, correct })
    }

    pub fn start_quiz<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) {
        self.quiz.start(catalog, self.settings.question_count(), rng);
    }

    pub fn submit_quiz_answer(&mut self, user_value: f64) -> Option<SubmitOutcome> {
        self.quiz.submit_answer(
            user_value,
            self.settings.tolerance_fraction(),
            &mut self.history,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::Area;
    use crate::quiz::history::Outcome;

    fn topic(catalog: &Catalog, area: Area, name: &str) -> Topic {
        *catalog.find(area, name).unwrap()
    }

    #[test]
    fn grading_needs_a_shown_exercise() {
        let catalog = Catalog::standard();
        let density = topic(&catalog, Area::Chemistry, "Densidad (ρ = m / V)");
        let mut session = Session::default();

        assert!(session.grade_exercise(&density, 2.0).is_none());
        assert!(session.history.is_empty());
    }

    #[test]
    fn practice_attempts_are_logged_as_exercises() {
        let catalog = Catalog::standard();
        let ohm = topic(&catalog, Area::Physics, "Ley de Ohm (V = I·R)");
        let mut session = Session::default();

        let expected = session.exercises.get_or_create(&ohm).expected;
        let hit = session.grade_exercise(&ohm, expected).unwrap();
        let miss = session.grade_exercise(&ohm, expected * 3.0 + 1.0).unwrap();

        assert!(hit.correct);
        assert!(!miss.correct);
        assert_eq!(hit.question, miss.question);

        let records = session.history.snapshot();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.kind == AttemptKind::Exercise));
        assert_eq!(records[0].outcome, Outcome::Correct);
        assert_eq!(records[1].outcome, Outcome::Incorrect);
        assert_eq!(records[0].topic, "Ley de Ohm (V = I·R)");
    }

    #[test]
    fn practice_uses_current_tolerance() {
        let catalog = Catalog::standard();
        let velocity = topic(&catalog, Area::Physics, "Velocidad media (v = d / t)");
        let mut session = Session::default();
        let expected = session.exercises.get_or_create(&velocity).expected;

        session.settings.set_tolerance_percent(50.0).unwrap();
        assert!(session.grade_exercise(&velocity, expected * 1.4).unwrap().correct);

        session.settings.set_tolerance_percent(0.1).unwrap();
        assert!(!session.grade_exercise(&velocity, expected * 1.4).unwrap().correct);
    }

    #[test]
    fn quiz_uses_configured_question_count() {
        let catalog = Catalog::standard();
        let mut session = Session::default();
        session.settings.set_question_count(3).unwrap();
        session.start_quiz(&catalog, &mut rand::thread_rng());

        for _ in 0..3 {
            let expected = session.quiz.current().unwrap().1.expected;
            assert!(session.submit_quiz_answer(expected).unwrap().correct);
        }

        let summary = session.quiz.summary().unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.score, 100.0);
        assert_eq!(session.history.len(), 3);
    }

    #[test]
    fn sessions_are_isolated() {
        let catalog = Catalog::standard();
        let mut alice = Session::default();
        let bob = Session::default();

        alice.settings.set_question_count(2).unwrap();
        alice.start_quiz(&catalog, &mut rand::thread_rng());
        alice.submit_quiz_answer(0.5);

        assert!(bob.history.is_empty());
        assert_eq!(bob.quiz, QuizSession::Idle);
        assert_eq!(bob.settings, Settings::default());
    }
}
