//! The PRUEBATE mixed quiz.
//!
//! A quiz moves `Idle -> InProgress -> Finished` and back to `Idle` on reset.
//! Starting again from `Finished` goes straight to a fresh `InProgress`.
//! Every submit grades, logs and advances unconditionally, so the caller must
//! invoke [`QuizSession::submit_answer`] exactly once per displayed question.

use indexmap::IndexMap;
use log::{debug, info};
use rand::Rng;

use crate::quiz::catalog::{Area, Catalog};
use crate::quiz::grading::within_tolerance;
use crate::quiz::history::{AttemptKind, HistoryLedger};
use crate::quiz::GeneratedQuestion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
    pub area: Area,
    pub topic: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizRun {
    questions: Vec<GeneratedQuestion>,
    current_index: usize,
    correct_count: usize,
    misses: Vec<Miss>,
}

impl QuizRun {
    pub fn questions(&self) -> &[GeneratedQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn misses(&self) -> &[Miss] {
        &self.misses
    }

    fn summary(&self) -> QuizSummary {
        let total = self.questions.len();
        let score = if total == 0 {
            0.0
        } else {
            100.0 * self.correct_count as f64 / total as f64
        };

        let mut grouped: IndexMap<(Area, &str), usize> = IndexMap::new();
        for miss in &self.misses {
            *grouped.entry((miss.area, miss.topic.as_str())).or_insert(0) += 1;
        }
        let weak_topics = grouped
            .into_iter()
            .map(|((area, topic), misses)| WeakTopic {
                area,
                topic: topic.to_string(),
                misses,
            })
            .collect();

        QuizSummary {
            correct: self.correct_count,
            total,
            score,
            weak_topics,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum QuizSession {
    #[default]
    Idle,
    InProgress(QuizRun),
    /// Keeps the finished run around for the summary.
    Finished(QuizRun),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub question: GeneratedQuestion,
    pub correct: bool,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeakTopic {
    pub area: Area,
    pub topic: String,
    pub misses: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSummary {
    pub correct: usize,
    pub total: usize,
    /// Percentage in `0.0..=100.0`.
    pub score: f64,
    /// Missed topics with their miss counts, in order of first miss.
    pub weak_topics: Vec<WeakTopic>,
}

impl QuizSession {
    /// Draws `question_count` topics uniformly with replacement and freezes one
    /// exercise per draw. Any previous run is discarded.
    pub fn start<R: Rng + ?Sized>(&mut self, catalog: &Catalog, question_count: usize, rng: &mut R) {
        let questions = (0..question_count)
            .map(|_| GeneratedQuestion::generate(catalog.random_topic(rng)))
            .collect();
        *self = QuizSession::InProgress(QuizRun {
            questions,
            ..QuizRun::default()
        });
        info!("PRUEBATE started with {question_count} questions");
        self.finish_if_exhausted();
    }

    /// The question on screen and its zero-based index.
    pub fn current(&self) -> Option<(usize, &GeneratedQuestion)> {
        match self {
            QuizSession::InProgress(run) => run
                .questions
                .get(run.current_index)
                .map(|question| (run.current_index, question)),
            _ => None,
        }
    }

    /// Grades the current question with the tolerance in effect right now,
    /// logs the attempt and advances. Returns `None` outside `InProgress`.
    pub fn submit_answer(
        &mut self,
        user_value: f64,
        tolerance_fraction: f64,
        history: &mut HistoryLedger,
    ) -> Option<SubmitOutcome> {
        self.finish_if_exhausted();
        let QuizSession::InProgress(run) = self else {
            return None;
        };
        let question = run.questions.get(run.current_index)?.clone();

        let correct = within_tolerance(question.expected, user_value, tolerance_fraction);
        history.record(
            question.area,
            &question.topic,
            AttemptKind::Quiz,
            question.expected,
            user_value,
            correct,
        );
        if correct {
            run.correct_count += 1;
        } else {
            run.misses.push(Miss {
                area: question.area,
                topic: question.topic.clone(),
            });
        }
        run.current_index += 1;
        debug!(
            "PRUEBATE question {}/{} graded: correct={correct}",
            run.current_index,
            run.questions.len()
        );

        self.finish_if_exhausted();
        Some(SubmitOutcome {
            question,
            correct,
            finished: self.is_finished(),
        })
    }

    /// Moves an exhausted `InProgress` run to `Finished` instead of letting
    /// anyone index past the end.
    pub fn finish_if_exhausted(&mut self) {
        if let QuizSession::InProgress(run) = self {
            if run.current_index >= run.questions.len() {
                let run = std::mem::take(run);
                info!(
                    "PRUEBATE finished: {}/{} correct",
                    run.correct_count,
                    run.questions.len()
                );
                *self = QuizSession::Finished(run);
            }
        }
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        match self {
            QuizSession::Finished(run) => Some(run.summary()),
            _ => None,
        }
    }

    /// Back to `Idle`. History rows written by the quiz are kept.
    pub fn reset(&mut self) {
        *self = QuizSession::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, QuizSession::InProgress(_))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, QuizSession::Finished(_))
    }

    pub fn run(&self) -> Option<&QuizRun> {
        match self {
            QuizSession::Idle => None,
            QuizSession::InProgress(run) | QuizSession::Finished(run) => Some(run),
        }
    }
}
