use std::time::Duration;

use chatgpt::{client::ChatGPT, config::ChatGPTEngine};
use log::{debug, warn};

use crate::quiz::catalog::Area;

/// Asks a language model for explanations and hints. Never fails: without an
/// API key, on timeout or on any request error the answer is a local
/// explanation built from the statement and the topic's area.
pub struct HintHelper {
    chat_gpt: Option<ChatGPT>,
    timeout: Duration,
}

impl HintHelper {
    pub fn new(api_key: Option<&str>, timeout: Duration) -> Self {
        let chat_gpt = api_key.and_then(|key| match ChatGPT::new(key) {
            Ok(mut gpt) => {
                gpt.config.engine = ChatGPTEngine::Gpt35Turbo;
                gpt.config.timeout = timeout;
                Some(gpt)
            }
            Err(err) => {
                warn!("Unable to set up ChatGPT, using local explanations only: {err}");
                None
            }
        });
        Self { chat_gpt, timeout }
    }

    pub fn has_ai(&self) -> bool {
        self.chat_gpt.is_some()
    }

    pub async fn ask_ai(
        &self,
        topic_label: &str,
        prompt: &str,
        expected: Option<f64>,
        unit: &str,
    ) -> String {
        let Some(chat_gpt) = &self.chat_gpt else {
            return local_fallback(topic_label, prompt, expected, unit);
        };

        let request = remote_prompt(topic_label, prompt, expected);
        debug!("Requesting AI explanation for {topic_label:?}");

        match tokio::time::timeout(self.timeout, chat_gpt.send_message(request)).await {
            Ok(Ok(response)) => {
                let content = response.message().content.trim().to_string();
                if content.is_empty() {
                    warn!("AI returned an empty explanation for {topic_label:?}");
                    return local_fallback(topic_label, prompt, expected, unit);
                }
                content
            }
            Ok(Err(err)) => {
                warn!("AI request for {topic_label:?} failed: {err}");
                local_fallback(topic_label, prompt, expected, unit)
            }
            Err(_) => {
                warn!(
                    "AI request for {topic_label:?} timed out after {}s",
                    self.timeout.as_secs()
                );
                local_fallback(topic_label, prompt, expected, unit)
            }
        }
    }
}

fn remote_prompt(topic_label: &str, prompt: &str, expected: Option<f64>) -> String {
    let area_hint = match Area::detect(topic_label) {
        Some(Area::Math) => {
            "El tema es de matemáticas (nivel bachillerato). \
             Insiste en los pasos de despeje, el cuidado de los signos y el orden de operaciones."
        }
        Some(Area::Physics) => {
            "El tema es de física (nivel bachillerato). \
             Insiste en el análisis de magnitudes físicas y sus unidades."
        }
        Some(Area::Chemistry) => {
            "El tema es de química (nivel bachillerato). \
             Insiste en concentración, moles, volumen, masa y unidades químicas."
        }
        None => "Tema de ciencias a nivel bachillerato.",
    };

    let mut request = format!(
        "{area_hint} Explica en español, con frases cortas y claras, sin LaTeX ni símbolos raros. \
         Máximo 7 frases. Termina con una sección llamada 'Chequeo rápido' con 2 puntos \
         para que el alumno revise su resultado.\n\n\
         Tema: {topic_label}\nEjercicio o situación: {prompt}\n"
    );
    if expected.is_some() {
        request.push_str(
            "Existe un valor de referencia que se usa internamente para revisar la respuesta del alumno.\n",
        );
    }
    request
}

fn local_fallback(topic_label: &str, prompt: &str, expected: Option<f64>, unit: &str) -> String {
    let area = Area::detect(topic_label);

    let mut text = format!(
        "[IA local] Explicación generada sin conectarse a un modelo externo.\n\n\
         Tema: {topic_label}\n\n\
         Resumen del ejercicio:\n{}\n\n",
        prompt.trim()
    );

    // Math answers are not hinted at, to avoid giving the result away
    if expected.is_some() && area != Some(Area::Math) {
        text.push_str("Hay un valor de referencia (solo se usa para revisar tu respuesta).\n");
        if !unit.is_empty() {
            text.push_str(&format!("Expresa tu resultado en {unit}.\n"));
        }
        text.push('\n');
    }

    text.push_str("Cómo podrías abordarlo:\n");
    text.push_str(match area {
        Some(Area::Math) => {
            "- Identifica qué expresión tienes (por ejemplo, ax + b = 0).\n\
             - Aísla la incógnita: pasa términos al otro lado y divide entre el coeficiente.\n\
             - Revisa signos, fracciones y el orden de operaciones.\n\n\
             Chequeo rápido:\n\
             1) ¿Cambiaste el signo al pasar términos al otro lado?\n\
             2) ¿Dividiste entre el coeficiente correcto (y no entre 0)?\n"
        }
        Some(Area::Physics) => {
            "- Anota las magnitudes con sus unidades (m, s, m/s, N, J...).\n\
             - Escribe la fórmula que relaciona esas magnitudes.\n\
             - Sustituye los valores con cuidado y opera.\n\n\
             Chequeo rápido:\n\
             1) ¿Las unidades finales corresponden a la magnitud pedida?\n\
             2) ¿El valor es razonable (ni absurdo ni negativo cuando no debe)?\n"
        }
        Some(Area::Chemistry) => {
            "- Identifica qué se pide: concentración, volumen, moles, masa...\n\
             - Escribe la fórmula adecuada (por ejemplo, M = n / V o ρ = m / V).\n\
             - Comprueba que volumen, masa y moles estén en unidades coherentes.\n\n\
             Chequeo rápido:\n\
             1) ¿Usaste las unidades correctas (L, mol, g, mL...)?\n\
             2) ¿El resultado tiene sentido con los datos (al diluir no aumenta la concentración)?\n"
        }
        None => {
            "- Identifica los datos conocidos y lo que quieres calcular.\n\
             - Escribe la relación o fórmula central del problema.\n\
             - Sustituye y verifica cada operación.\n\n\
             Chequeo rápido:\n\
             1) ¿Tus pasos siguen una lógica clara de despeje o sustitución?\n\
             2) ¿El número y sus unidades tienen sentido en el contexto?\n"
        }
    });

    text
}
