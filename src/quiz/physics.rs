use crate::quiz::catalog::{pick, Area, Example, Exercise, Topic};

pub const TOPICS: &[Topic] = &[
    Topic {
        area: Area::Physics,
        name: "Velocidad media (v = d / t)",
        explain: velocity_explain,
        example: velocity_example,
        exercise: velocity_exercise,
    },
    Topic {
        area: Area::Physics,
        name: "Energía cinética (Ec = 1/2 m v²)",
        explain: kinetic_explain,
        example: kinetic_example,
        exercise: kinetic_exercise,
    },
    Topic {
        area: Area::Physics,
        name: "Ley de Ohm (V = I·R)",
        explain: ohm_explain,
        example: ohm_example,
        exercise: ohm_exercise,
    },
    Topic {
        area: Area::Physics,
        name: "MRUA básico (v = v0 + a·t)",
        explain: accelerated_explain,
        example: accelerated_example,
        exercise: accelerated_exercise,
    },
];

fn velocity_explain() -> String {
    "La velocidad media relaciona el desplazamiento con el tiempo empleado:\n  v = d / t\n\n\
     d es el desplazamiento (metros en el SI) y t el tiempo (segundos); v sale en m/s.\n\n\
     Ojo: cuenta el cambio neto de posición entre el punto inicial y el final, \
     no la distancia total recorrida."
        .to_string()
}

fn velocity_example() -> Example {
    let v = 150.0_f64 / 30.0;
    Example {
        statement: "Ejemplo: un objeto recorre 150 m en 30 s. Calcula la velocidad media."
            .to_string(),
        solution: format!(
            "Aplicamos v = d / t:\n  v = 150 m / 30 s = 5 m/s.\n\n\
             Resultado numérico: v = {v:.3} m/s."
        ),
    }
}

fn velocity_exercise() -> Exercise {
    let (d, t) = pick(&[(100, 20), (250, 50), (300, 30), (420, 21), (180, 12)]);
    Exercise {
        statement: format!("Un móvil se desplaza {d} m en {t} s. Calcula la velocidad media en m/s."),
        expected: f64::from(d) / f64::from(t),
        unit: "m/s".to_string(),
        hint: "Recuerda: v = d / t, con metros y segundos.".to_string(),
    }
}

fn kinetic_explain() -> String {
    "La energía cinética es la energía asociada al movimiento:\n  Ec = 1/2 · m · v²\n\n\
     m es la masa (kg) y v la rapidez (m/s); el resultado se expresa en joules (J).\n\
     A más masa o más velocidad, más energía cinética."
        .to_string()
}

fn kinetic_example() -> Example {
    let ec = 0.5_f64 * 2.0 * 3.0 * 3.0;
    Example {
        statement: "Ejemplo: una masa de 2 kg se mueve a 3 m/s. Calcula la energía cinética."
            .to_string(),
        solution: format!(
            "Aplicamos Ec = 1/2·m·v²:\n  Ec = 1/2 · 2 kg · (3 m/s)² = 1 · 9 = 9 J.\n\n\
             Resultado numérico: Ec = {ec:.3} J."
        ),
    }
}

fn kinetic_exercise() -> Exercise {
    let (m, v) = pick(&[(1.5, 4.0), (3.0, 2.5), (5.0, 6.0), (2.2, 7.5), (4.5, 3.3)]);
    Exercise {
        statement: format!(
            "Un objeto de masa {m:.1} kg se mueve a {v:.1} m/s. Calcula Ec en joules."
        ),
        expected: 0.5 * m * v * v,
        unit: "J".to_string(),
        hint: "Eleva la velocidad al cuadrado y multiplica por 1/2 · m.".to_string(),
    }
}

fn ohm_explain() -> String {
    "La ley de Ohm relaciona voltaje, corriente y resistencia:\n  V = I · R\n\n\
     V en volts (V), I en amperes (A) y R en ohms (Ω).\n\
     Despejes:\n  I = V / R\n  R = V / I"
        .to_string()
}

fn ohm_example() -> Example {
    let v = 2.0_f64 * 10.0;
    Example {
        statement: "Ejemplo: por una resistencia de 10 Ω circulan 2 A. Calcula el voltaje."
            .to_string(),
        solution: format!(
            "Usamos V = I·R:\n  V = 2 A · 10 Ω = 20 V.\n\n\
             Resultado numérico: V = {v:.3} V."
        ),
    }
}

#[derive(Debug, Clone, Copy)]
enum OhmUnknown {
    Voltage,
    Current,
    Resistance,
}

fn ohm_exercise() -> Exercise {
    match pick(&[OhmUnknown::Voltage, OhmUnknown::Current, OhmUnknown::Resistance]) {
        OhmUnknown::Voltage => {
            let (i, r) = (3.0_f64, 15.0_f64);
            Exercise {
                statement: format!(
                    "Por una resistencia de {r:.1} Ω circula una corriente de {i:.1} A.\n\
                     Calcula el voltaje V."
                ),
                expected: i * r,
                unit: "V".to_string(),
                hint: "Usa V = I · R.".to_string(),
            }
        }
        OhmUnknown::Current => {
            let (v, r) = (48.0_f64, 12.0_f64);
            Exercise {
                statement: format!(
                    "En un circuito hay un voltaje de {v:.1} V y una resistencia de {r:.1} Ω.\n\
                     Calcula la corriente I."
                ),
                expected: v / r,
                unit: "A".to_string(),
                hint: "Usa I = V / R.".to_string(),
            }
        }
        OhmUnknown::Resistance => {
            let (v, i) = (24.0_f64, 3.0_f64);
            Exercise {
                statement: format!(
                    "En un circuito hay un voltaje de {v:.1} V y una corriente de {i:.1} A.\n\
                     Calcula la resistencia R."
                ),
                expected: v / i,
                unit: "Ω".to_string(),
                hint: "Usa R = V / I.".to_string(),
            }
        }
    }
}

fn accelerated_explain() -> String {
    "Con aceleración constante, la velocidad cambia linealmente con el tiempo:\n  v = v0 + a·t\n\n\
     v0 es la velocidad inicial, a la aceleración y t el tiempo, todo en unidades coherentes \
     (m/s para velocidades y m/s² para la aceleración)."
        .to_string()
}

fn accelerated_example() -> Example {
    let v = 5.0_f64 + 2.0 * 3.0;
    Example {
        statement: "Ejemplo: un móvil parte con 5 m/s y acelera 2 m/s² durante 3 s. \
                    Calcula la velocidad final."
            .to_string(),
        solution: format!(
            "Aplicamos v = v0 + a·t:\n  v = 5 m/s + 2 m/s² · 3 s = 5 + 6 = 11 m/s.\n\n\
             Resultado numérico: v = {v:.3} m/s."
        ),
    }
}

fn accelerated_exercise() -> Exercise {
    let v0 = pick(&[2.0_f64, 4.0, 6.0]);
    let a = pick(&[1.0_f64, 1.5, 2.0]);
    let t = pick(&[3.0_f64, 4.0, 5.0]);
    Exercise {
        statement: format!(
            "Un móvil parte con velocidad inicial v0 = {v0:.1} m/s y acelera a = {a:.1} m/s² \
             durante t = {t:.1} s.\nCalcula la velocidad final v."
        ),
        expected: v0 + a * t,
        unit: "m/s".to_string(),
        hint: "Aplica v = v0 + a·t con todas las magnitudes en unidades coherentes.".to_string(),
    }
}
