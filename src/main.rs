mod config;
mod quiz;
mod session;

use std::sync::Arc;

use config::{parse_number, AppConfig};
use dotenv::dotenv;
use log::{debug, error, info};
use quiz::{
    ai_helper::HintHelper,
    catalog::{Area, Catalog, Topic},
    history::{self, HistoryLedger, CSV_FILE_NAME},
    session::QuizSummary,
    GeneratedQuestion,
};
use session::Session;
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{ChatAction, InputFile, KeyboardButton, KeyboardMarkup, ParseMode},
    utils::html,
};

type SessionDialogue = Dialogue<State, InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Where the chat currently is. Every screen carries the chat's `Session`.
#[derive(Clone, Default)]
pub enum State {
    #[default]
    Start,
    Menu(Session),
    ChooseTopic {
        session: Session,
        area: Area,
    },
    Practice {
        session: Session,
        area: Area,
        topic: &'static str,
        last_answer: Option<f64>,
    },
    QuizLobby(Session),
    Quiz(Session),
    QuizSummary(Session),
    Settings(Session),
    ReceiveTolerance(Session),
    ReceiveQuestionCount(Session),
}

#[tokio::main]
async fn main() {
    let dotenv_result = dotenv();
    pretty_env_logger::init();
    if let Err(err) = dotenv_result {
        debug!("No .env file loaded: {err}");
    }
    info!("Starting Smart Form bot...");

    let config = AppConfig::from_env();
    let bot = Bot::from_env();

    let catalog = Arc::new(Catalog::standard());
    info!("Loaded {} topics", catalog.topics().len());

    let hint_helper = Arc::new(HintHelper::new(
        config.chatgpt_api_key.as_deref(),
        config.ai_timeout,
    ));
    if hint_helper.has_ai() {
        info!("AI hints enabled (timeout {}s)", config.ai_timeout.as_secs());
    } else {
        info!("CHATGPT_API_KEY not set, AI hints use local explanations only");
    }

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, InMemStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::Menu(session)].endpoint(menu))
            .branch(dptree::case![State::ChooseTopic { session, area }].endpoint(choose_topic))
            .branch(
                dptree::case![State::Practice {
                    session,
                    area,
                    topic,
                    last_answer
                }]
                .endpoint(practice),
            )
            .branch(dptree::case![State::QuizLobby(session)].endpoint(quiz_lobby))
            .branch(dptree::case![State::Quiz(session)].endpoint(quiz_question))
            .branch(dptree::case![State::QuizSummary(session)].endpoint(quiz_summary))
            .branch(dptree::case![State::Settings(session)].endpoint(settings))
            .branch(dptree::case![State::ReceiveTolerance(session)].endpoint(receive_tolerance))
            .branch(
                dptree::case![State::ReceiveQuestionCount(session)]
                    .endpoint(receive_question_count),
            ),
    )
    .dependencies(dptree::deps![
        InMemStorage::<State>::new(),
        catalog,
        hint_helper
    ])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const QUIZ_BUTTON: &str = "🎯 PRUEBATE";
const HISTORY_BUTTON: &str = "📜 Historial";
const SETTINGS_BUTTON: &str = "⚙ Configuración";
const CLEAR_HISTORY_BUTTON: &str = "🧹 Borrar historial";
const MENU_BUTTON: &str = "⬅ Menú";
const TOPICS_BUTTON: &str = "⬅ Temas";
const EXPLAIN_BUTTON: &str = "📘 Explicación";
const EXAMPLE_BUTTON: &str = "🧪 Ejemplo resuelto";
const EXERCISE_BUTTON: &str = "📝 Ejercicio";
const NEW_EXERCISE_BUTTON: &str = "🔁 Nuevo ejercicio";
const AI_TOPIC_BUTTON: &str = "🤖 IA: explicar tema";
const AI_EXERCISE_BUTTON: &str = "🤖 IA: explicar ejercicio";
const START_QUIZ_BUTTON: &str = "🚀 Iniciar PRUEBATE";
const ANOTHER_QUIZ_BUTTON: &str = "🔁 Hacer otro PRUEBATE";
const ABANDON_QUIZ_BUTTON: &str = "⏹ Abandonar PRUEBATE";
const TOLERANCE_BUTTON: &str = "Tolerancia (%)";
const QUESTION_COUNT_BUTTON: &str = "Número de preguntas";

/// How many history rows fit comfortably in one chat message.
const HISTORY_PREVIEW_ROWS: usize = 15;

fn main_menu_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        Area::ALL
            .iter()
            .map(|area| KeyboardButton::new(area.button()))
            .collect::<Vec<_>>(),
        vec![KeyboardButton::new(QUIZ_BUTTON), KeyboardButton::new(HISTORY_BUTTON)],
        vec![
            KeyboardButton::new(SETTINGS_BUTTON),
            KeyboardButton::new(CLEAR_HISTORY_BUTTON),
        ],
    ])
}

fn topics_keyboard(catalog: &Catalog, area: Area) -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = catalog
        .by_area(area)
        .map(|topic| vec![KeyboardButton::new(topic.name)])
        .collect();
    rows.push(vec![KeyboardButton::new(MENU_BUTTON)]);
    KeyboardMarkup::new(rows)
}

fn practice_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(EXPLAIN_BUTTON),
            KeyboardButton::new(EXAMPLE_BUTTON),
        ],
        vec![
            KeyboardButton::new(EXERCISE_BUTTON),
            KeyboardButton::new(NEW_EXERCISE_BUTTON),
        ],
        vec![
            KeyboardButton::new(AI_TOPIC_BUTTON),
            KeyboardButton::new(AI_EXERCISE_BUTTON),
        ],
        vec![KeyboardButton::new(TOPICS_BUTTON), KeyboardButton::new(MENU_BUTTON)],
    ])
}

fn settings_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(TOLERANCE_BUTTON),
            KeyboardButton::new(QUESTION_COUNT_BUTTON),
        ],
        vec![KeyboardButton::new(MENU_BUTTON)],
    ])
}

async fn show_menu(
    bot: &Bot,
    dialogue: &SessionDialogue,
    chat_id: ChatId,
    session: Session,
) -> HandlerResult {
    bot.send_message(chat_id, "¿Qué quieres hacer?")
        .reply_markup(main_menu_keyboard())
        .await?;
    dialogue.update(State::Menu(session)).await?;
    Ok(())
}

async fn start(
    bot: Bot,
    dialogue: SessionDialogue,
    msg: Message,
    hint_helper: Arc<HintHelper>,
) -> HandlerResult {
    let ai_status = if hint_helper.has_ai() {
        "IA activada: si el modelo externo falla, se usa una explicación local."
    } else {
        "IA en modo local: las explicaciones se generan sin modelo externo."
    };
    bot.send_message(
        msg.chat.id,
        format!(
            "¡Hola! Soy Smart Form 🧪\n\
             Practica Matemáticas, Física y Química con explicaciones, ejemplos resueltos \
             y ejercicios con corrección automática, o ponte a prueba con PRUEBATE.\n\n\
             {ai_status}"
        ),
    )
    .await?;

    show_menu(&bot, &dialogue, msg.chat.id, Session::default()).await
}

async fn menu(
    bot: Bot,
    dialogue: SessionDialogue,
    mut session: Session,
    msg: Message,
    catalog: Arc<Catalog>,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();

    if let Some(area) = Area::ALL.into_iter().find(|area| area.button() == text) {
        bot.send_message(msg.chat.id, format!("{} Elige un tema de {area}", area.icon()))
            .reply_markup(topics_keyboard(&catalog, area))
            .await?;
        dialogue.update(State::ChooseTopic { session, area }).await?;
        return Ok(());
    }

    match text {
        QUIZ_BUTTON => show_quiz_lobby(&bot, &dialogue, msg.chat.id, session).await,
        HISTORY_BUTTON => {
            send_history(&bot, msg.chat.id, &session.history).await?;
            dialogue.update(State::Menu(session)).await?;
            Ok(())
        }
        SETTINGS_BUTTON => show_settings(&bot, &dialogue, msg.chat.id, session).await,
        CLEAR_HISTORY_BUTTON => {
            session.history.clear();
            info!("History cleared for chat {}", msg.chat.id);
            bot.send_message(msg.chat.id, "Historial borrado en esta sesión.")
                .await?;
            dialogue.update(State::Menu(session)).await?;
            Ok(())
        }
        _ => show_menu(&bot, &dialogue, msg.chat.id, session).await,
    }
}

async fn choose_topic(
    bot: Bot,
    dialogue: SessionDialogue,
    (mut session, area): (Session, Area),
    msg: Message,
    catalog: Arc<Catalog>,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();
    if text == MENU_BUTTON {
        return show_menu(&bot, &dialogue, msg.chat.id, session).await;
    }

    let Some(topic) = catalog.find(area, text).copied() else {
        bot.send_message(msg.chat.id, "Elige uno de los temas del teclado.")
            .reply_markup(topics_keyboard(&catalog, area))
            .await?;
        return Ok(());
    };

    session.exercises.select(&topic);
    bot.send_message(
        msg.chat.id,
        format!("📘 {}\n\n{}", topic.name, topic.explain()),
    )
    .reply_markup(practice_keyboard())
    .await?;

    dialogue
        .update(State::Practice {
            session,
            area,
            topic: topic.name,
            last_answer: None,
        })
        .await?;
    Ok(())
}

async fn practice(
    bot: Bot,
    dialogue: SessionDialogue,
    (mut session, area, topic_name, mut last_answer): (Session, Area, &'static str, Option<f64>),
    msg: Message,
    catalog: Arc<Catalog>,
    hint_helper: Arc<HintHelper>,
) -> HandlerResult {
    let Some(topic) = catalog.find(area, topic_name).copied() else {
        return show_menu(&bot, &dialogue, msg.chat.id, session).await;
    };
    let text = msg.text().unwrap_or_default();

    match text {
        MENU_BUTTON => return show_menu(&bot, &dialogue, msg.chat.id, session).await,
        TOPICS_BUTTON => {
            bot.send_message(msg.chat.id, format!("{} Elige un tema de {area}", area.icon()))
                .reply_markup(topics_keyboard(&catalog, area))
                .await?;
            dialogue.update(State::ChooseTopic { session, area }).await?;
            return Ok(());
        }
        EXPLAIN_BUTTON => {
            bot.send_message(msg.chat.id, topic.explain()).await?;
        }
        EXAMPLE_BUTTON => {
            let example = topic.example();
            bot.send_message(
                msg.chat.id,
                format!(
                    "{}\n\n<b>Solución</b> (toca para verla):\n<tg-spoiler>{}</tg-spoiler>",
                    html::escape(&example.statement),
                    html::escape(&example.solution)
                ),
            )
            .parse_mode(ParseMode::Html)
            .await?;
        }
        EXERCISE_BUTTON => {
            let question = session.exercises.get_or_create(&topic).clone();
            send_practice_exercise(&bot, msg.chat.id, &question).await?;
        }
        NEW_EXERCISE_BUTTON => {
            let question = session.exercises.regenerate(&topic).clone();
            last_answer = None;
            send_practice_exercise(&bot, msg.chat.id, &question).await?;
        }
        AI_TOPIC_BUTTON => {
            // Best effort
            let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;
            let reply = hint_helper
                .ask_ai(&topic.label(), &topic.explain(), None, "")
                .await;
            bot.send_message(msg.chat.id, reply).await?;
        }
        AI_EXERCISE_BUTTON => match session.exercises.get(&topic).cloned() {
            None => {
                bot.send_message(msg.chat.id, "Primero pide un ejercicio con 📝 Ejercicio.")
                    .await?;
            }
            Some(question) => {
                let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;
                let mut prompt = question.statement.clone();
                if let Some(answer) = last_answer {
                    prompt.push_str(&format!(
                        "\nLa respuesta del alumno fue: {answer:.6} {} \
                         (el sistema conoce un valor de referencia para revisar).",
                        question.unit
                    ));
                }
                let reply = hint_helper
                    .ask_ai(&topic.label(), &prompt, Some(question.expected), &question.unit)
                    .await;
                bot.send_message(msg.chat.id, reply).await?;
            }
        },
        _ => match parse_number(text) {
            None => {
                bot.send_message(
                    msg.chat.id,
                    "Escribe tu respuesta como número (por ejemplo 2.5) o usa los botones.",
                )
                .reply_markup(practice_keyboard())
                .await?;
            }
            Some(answer) => match session.grade_exercise(&topic, answer) {
                None => {
                    bot.send_message(msg.chat.id, "Primero pide un ejercicio con 📝 Ejercicio.")
                        .await?;
                }
                Some(result) => {
                    debug!(
                        "Practice answer for {}: correct={}",
                        topic.label(),
                        result.correct
                    );
                    last_answer = Some(answer);
                    bot.send_message(msg.chat.id, grading_feedback(&result.question, result.correct))
                        .await?;
                }
            },
        },
    }

    dialogue
        .update(State::Practice {
            session,
            area,
            topic: topic.name,
            last_answer,
        })
        .await?;
    Ok(())
}

async fn send_practice_exercise(
    bot: &Bot,
    chat_id: ChatId,
    question: &GeneratedQuestion,
) -> HandlerResult {
    bot.send_message(
        chat_id,
        format!(
            "📝 {}\n\nEscribe tu respuesta numérica{}.",
            question.statement,
            unit_suffix(&question.unit)
        ),
    )
    .await?;
    Ok(())
}

fn unit_suffix(unit: &str) -> String {
    if unit.is_empty() {
        String::new()
    } else {
        format!(" (en {unit})")
    }
}

fn grading_feedback(question: &GeneratedQuestion, correct: bool) -> String {
    if correct {
        format!("CORRECTO ✅ · Solución: {}", question.solution())
    } else {
        format!(
            "INCORRECTO ❌ · Solución: {}\nPista: {}",
            question.solution(),
            question.hint
        )
    }
}

async fn show_quiz_lobby(
    bot: &Bot,
    dialogue: &SessionDialogue,
    chat_id: ChatId,
    session: Session,
) -> HandlerResult {
    if session.quiz.is_active() {
        send_quiz_question(bot, chat_id, &session).await?;
        dialogue.update(State::Quiz(session)).await?;
        return Ok(());
    }

    bot.send_message(
        chat_id,
        format!(
            "🎯 PRUEBATE genera {} preguntas aleatorias de Matemáticas, Física y Química.\n\
             Se califican con una tolerancia de {:.1} % y cada respuesta queda en el historial.",
            session.settings.question_count(),
            session.settings.tolerance_percent()
        ),
    )
    .reply_markup(KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(START_QUIZ_BUTTON)],
        vec![KeyboardButton::new(SETTINGS_BUTTON), KeyboardButton::new(MENU_BUTTON)],
    ]))
    .await?;
    dialogue.update(State::QuizLobby(session)).await?;
    Ok(())
}

async fn quiz_lobby(
    bot: Bot,
    dialogue: SessionDialogue,
    session: Session,
    msg: Message,
    catalog: Arc<Catalog>,
) -> HandlerResult {
    match msg.text().unwrap_or_default() {
        START_QUIZ_BUTTON => begin_quiz(&bot, &dialogue, msg.chat.id, session, &catalog).await,
        SETTINGS_BUTTON => show_settings(&bot, &dialogue, msg.chat.id, session).await,
        MENU_BUTTON => show_menu(&bot, &dialogue, msg.chat.id, session).await,
        _ => show_quiz_lobby(&bot, &dialogue, msg.chat.id, session).await,
    }
}

async fn begin_quiz(
    bot: &Bot,
    dialogue: &SessionDialogue,
    chat_id: ChatId,
    mut session: Session,
    catalog: &Catalog,
) -> HandlerResult {
    session.start_quiz(catalog, &mut rand::thread_rng());
    info!(
        "Chat {chat_id} started PRUEBATE with {} questions",
        session.settings.question_count()
    );

    bot.send_message(chat_id, "¡Comenzamos! Responde con calma.")
        .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new(
            ABANDON_QUIZ_BUTTON,
        )]]))
        .await?;

    if session.quiz.is_finished() {
        return send_quiz_summary(bot, dialogue, chat_id, session).await;
    }
    send_quiz_question(bot, chat_id, &session).await?;
    dialogue.update(State::Quiz(session)).await?;
    Ok(())
}

async fn send_quiz_question(bot: &Bot, chat_id: ChatId, session: &Session) -> HandlerResult {
    let Some((index, question)) = session.quiz.current() else {
        return Ok(());
    };
    let total = session.quiz.run().map_or(0, |run| run.questions().len());
    bot.send_message(
        chat_id,
        format!(
            "Pregunta {} de {}\n{} · {}\n\n{}\n\nTu respuesta{}:",
            index + 1,
            total,
            question.area,
            question.topic,
            question.statement,
            unit_suffix(&question.unit)
        ),
    )
    .await?;
    Ok(())
}

async fn quiz_question(
    bot: Bot,
    dialogue: SessionDialogue,
    mut session: Session,
    msg: Message,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();

    if text == ABANDON_QUIZ_BUTTON {
        session.quiz.reset();
        info!("Chat {} abandoned PRUEBATE", msg.chat.id);
        bot.send_message(msg.chat.id, "PRUEBATE cancelado. Las respuestas dadas siguen en el historial.")
            .await?;
        return show_menu(&bot, &dialogue, msg.chat.id, session).await;
    }

    let Some(answer) = parse_number(text) else {
        bot.send_message(msg.chat.id, "Escribe tu respuesta como número (por ejemplo 2.5).")
            .await?;
        return Ok(());
    };

    match session.submit_quiz_answer(answer) {
        Some(outcome) => {
            bot.send_message(msg.chat.id, grading_feedback(&outcome.question, outcome.correct))
                .await?;
            if outcome.finished {
                return send_quiz_summary(&bot, &dialogue, msg.chat.id, session).await;
            }
            send_quiz_question(&bot, msg.chat.id, &session).await?;
            dialogue.update(State::Quiz(session)).await?;
            Ok(())
        }
        None if session.quiz.is_finished() => {
            send_quiz_summary(&bot, &dialogue, msg.chat.id, session).await
        }
        None => show_quiz_lobby(&bot, &dialogue, msg.chat.id, session).await,
    }
}

fn summary_text(summary: &QuizSummary) -> String {
    let mut text = format!(
        "PRUEBATE terminado. Aciertos: {}/{} · Calificación: {:.1}/100\n\n",
        summary.correct, summary.total, summary.score
    );
    if summary.weak_topics.is_empty() {
        text.push_str("¡Excelente! No tuviste errores en este PRUEBATE. 🎉");
    } else {
        text.push_str("Temas a reforzar:\n");
        for weak in &summary.weak_topics {
            text.push_str(&format!(
                "- {} · {} (errores: {})\n",
                weak.area, weak.topic, weak.misses
            ));
        }
    }
    text
}

async fn send_quiz_summary(
    bot: &Bot,
    dialogue: &SessionDialogue,
    chat_id: ChatId,
    session: Session,
) -> HandlerResult {
    let Some(summary) = session.quiz.summary() else {
        return show_menu(bot, dialogue, chat_id, session).await;
    };
    bot.send_message(chat_id, summary_text(&summary))
        .reply_markup(KeyboardMarkup::new(vec![vec![
            KeyboardButton::new(ANOTHER_QUIZ_BUTTON),
            KeyboardButton::new(MENU_BUTTON),
        ]]))
        .await?;
    dialogue.update(State::QuizSummary(session)).await?;
    Ok(())
}

async fn quiz_summary(
    bot: Bot,
    dialogue: SessionDialogue,
    mut session: Session,
    msg: Message,
    catalog: Arc<Catalog>,
) -> HandlerResult {
    match msg.text().unwrap_or_default() {
        ANOTHER_QUIZ_BUTTON => begin_quiz(&bot, &dialogue, msg.chat.id, session, &catalog).await,
        MENU_BUTTON => {
            session.quiz.reset();
            show_menu(&bot, &dialogue, msg.chat.id, session).await
        }
        _ => send_quiz_summary(&bot, &dialogue, msg.chat.id, session).await,
    }
}

async fn send_history(bot: &Bot, chat_id: ChatId, history: &HistoryLedger) -> HandlerResult {
    let records = history.snapshot();
    if records.is_empty() {
        bot.send_message(
            chat_id,
            "Todavía no hay registros. Resuelve algunos ejercicios o realiza un PRUEBATE.",
        )
        .await?;
        return Ok(());
    }

    let shown = &records[records.len().saturating_sub(HISTORY_PREVIEW_ROWS)..];
    let mut text = format!(
        "📜 Historial de intentos (últimos {} de {}):\n\n",
        shown.len(),
        records.len()
    );
    for record in shown {
        text.push_str(&format!("{record}\n"));
    }
    bot.send_message(chat_id, text).await?;

    match history::to_csv(records) {
        Ok(bytes) => {
            bot.send_document(chat_id, InputFile::memory(bytes).file_name(CSV_FILE_NAME))
                .caption("Historial completo en CSV")
                .await?;
        }
        Err(err) => {
            error!("Failed to export history for chat {chat_id}: {err}");
            bot.send_message(chat_id, "No se pudo generar el CSV del historial.")
                .await?;
        }
    }
    Ok(())
}

async fn show_settings(
    bot: &Bot,
    dialogue: &SessionDialogue,
    chat_id: ChatId,
    session: Session,
) -> HandlerResult {
    bot.send_message(
        chat_id,
        format!(
            "⚙ Configuración actual\nTolerancia: {:.1} %\nPreguntas PRUEBATE: {}",
            session.settings.tolerance_percent(),
            session.settings.question_count()
        ),
    )
    .reply_markup(settings_keyboard())
    .await?;
    dialogue.update(State::Settings(session)).await?;
    Ok(())
}

async fn settings(
    bot: Bot,
    dialogue: SessionDialogue,
    session: Session,
    msg: Message,
) -> HandlerResult {
    match msg.text().unwrap_or_default() {
        TOLERANCE_BUTTON => {
            bot.send_message(msg.chat.id, "Escribe la tolerancia en % (entre 0.1 y 50).")
                .await?;
            dialogue.update(State::ReceiveTolerance(session)).await?;
            Ok(())
        }
        QUESTION_COUNT_BUTTON => {
            bot.send_message(
                msg.chat.id,
                "Escribe cuántas preguntas quieres en PRUEBATE (entre 1 y 30).",
            )
            .await?;
            dialogue.update(State::ReceiveQuestionCount(session)).await?;
            Ok(())
        }
        MENU_BUTTON => show_menu(&bot, &dialogue, msg.chat.id, session).await,
        _ => show_settings(&bot, &dialogue, msg.chat.id, session).await,
    }
}

async fn receive_tolerance(
    bot: Bot,
    dialogue: SessionDialogue,
    mut session: Session,
    msg: Message,
) -> HandlerResult {
    match session
        .settings
        .parse_tolerance_percent(msg.text().unwrap_or_default())
    {
        Ok(()) => show_settings(&bot, &dialogue, msg.chat.id, session).await,
        Err(err) => {
            bot.send_message(msg.chat.id, format!("No pude guardar la tolerancia: {err}."))
                .await?;
            Ok(())
        }
    }
}

async fn receive_question_count(
    bot: Bot,
    dialogue: SessionDialogue,
    mut session: Session,
    msg: Message,
) -> HandlerResult {
    match session
        .settings
        .parse_question_count(msg.text().unwrap_or_default())
    {
        Ok(()) => show_settings(&bot, &dialogue, msg.chat.id, session).await,
        Err(err) => {
            bot.send_message(
                msg.chat.id,
                format!("No pude guardar el número de preguntas: {err}."),
            )
            .await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::session::WeakTopic;

    fn question(unit: &str) -> GeneratedQuestion {
        GeneratedQuestion {
            area: Area::Physics,
            topic: "Ley de Ohm (V = I·R)".to_string(),
            statement: "Calcula la corriente I.".to_string(),
            expected: 4.0,
            unit: unit.to_string(),
            hint: "Usa I = V / R.".to_string(),
        }
    }

    #[test]
    fn feedback_shows_solution_and_hint_on_miss() {
        assert_eq!(
            grading_feedback(&question("A"), true),
            "CORRECTO ✅ · Solución: 4.000000 A"
        );
        assert_eq!(
            grading_feedback(&question(""), false),
            "INCORRECTO ❌ · Solución: 4.000000\nPista: Usa I = V / R."
        );
    }

    #[test]
    fn summary_lists_weak_topics() {
        let summary = QuizSummary {
            correct: 6,
            total: 8,
            score: 75.0,
            weak_topics: vec![WeakTopic {
                area: Area::Chemistry,
                topic: "Dilución (M1 V1 = M2 V2)".to_string(),
                misses: 2,
            }],
        };
        let text = summary_text(&summary);
        assert!(text.starts_with("PRUEBATE terminado. Aciertos: 6/8 · Calificación: 75.0/100"));
        assert!(text.contains("- Química · Dilución (M1 V1 = M2 V2) (errores: 2)"));
    }

    #[test]
    fn perfect_summary_congratulates() {
        let summary = QuizSummary {
            correct: 3,
            total: 3,
            score: 100.0,
            weak_topics: Vec::new(),
        };
        assert!(summary_text(&summary).contains("No tuviste errores"));
    }

    #[test]
    fn unit_suffix_skips_empty_units() {
        assert_eq!(unit_suffix(""), "");
        assert_eq!(unit_suffix("mL"), " (en mL)");
    }
}
