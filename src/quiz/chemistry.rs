use crate::quiz::catalog::{pick, Area, Example, Exercise, Topic};

pub const TOPICS: &[Topic] = &[
    Topic {
        area: Area::Chemistry,
        name: "Molaridad (M = n / V)",
        explain: molarity_explain,
        example: molarity_example,
        exercise: molarity_exercise,
    },
    Topic {
        area: Area::Chemistry,
        name: "Masa ↔ moles (n = m / M)",
        explain: moles_explain,
        example: moles_example,
        exercise: moles_exercise,
    },
    Topic {
        area: Area::Chemistry,
        name: "Densidad (ρ = m / V)",
        explain: density_explain,
        example: density_example,
        exercise: density_exercise,
    },
    Topic {
        area: Area::Chemistry,
        name: "Dilución (M1 V1 = M2 V2)",
        explain: dilution_explain,
        example: dilution_example,
        exercise: dilution_exercise,
    },
];

fn molarity_explain() -> String {
    "La molaridad M indica cuántos moles de soluto hay por litro de solución:\n  M = n / V\n\n\
     n son los moles de soluto y V el volumen de la solución en litros.\n\
     Se expresa en mol/L, que se suele abreviar como 'M'."
        .to_string()
}

fn molarity_example() -> Example {
    let m = 0.50_f64 / 0.25;
    Example {
        statement: "Ejemplo: una solución contiene 0.50 mol de soluto en 0.25 L. \
                    Calcula la molaridad."
            .to_string(),
        solution: format!(
            "Usamos M = n / V:\n  M = 0.50 mol / 0.25 L = 2.0 mol/L.\n\n\
             Resultado numérico: M = {m:.3} M."
        ),
    }
}

fn molarity_exercise() -> Exercise {
    let (n, v) = pick(&[(0.75, 0.50), (0.20, 0.80), (0.90, 0.30), (0.30, 0.60), (0.44, 0.22)]);
    Exercise {
        statement: format!(
            "En una solución hay {n:.2} mol de soluto disueltos en {v:.2} L de solución.\n\
             Calcula la molaridad M en mol/L."
        ),
        expected: n / v,
        unit: "M".to_string(),
        hint: "Pasa el volumen a litros si hace falta y aplica M = n / V.".to_string(),
    }
}

fn moles_explain() -> String {
    "Masa y cantidad de sustancia se relacionan con la masa molar M (g/mol):\n  n = m / M\n\n\
     m es la masa de la muestra en gramos y M la masa molar en g/mol; n sale en moles.\n\
     También puede despejarse m = n · M."
        .to_string()
}

fn moles_example() -> Example {
    let n = 18.0_f64 / 18.0;
    Example {
        statement: "Ejemplo: ¿cuántos moles hay en 18 g de agua (M ≈ 18 g/mol)?".to_string(),
        solution: format!(
            "Aplicamos n = m / M:\n  n = 18 g / (18 g/mol) = 1 mol.\n\n\
             Resultado numérico: n = {n:.3} mol."
        ),
    }
}

fn moles_exercise() -> Exercise {
    // (sample mass in g, molar mass in g/mol)
    let (m, molar) = pick(&[(12.0, 12.0), (58.5, 58.5), (32.0, 16.0), (36.5, 36.5), (98.0, 49.0)]);
    Exercise {
        statement: format!(
            "Una muestra tiene una masa m = {m:.1} g de una sustancia con masa molar \
             M = {molar:.1} g/mol.\nCalcula n en moles."
        ),
        expected: m / molar,
        unit: "mol".to_string(),
        hint: "Usa n = m / M, con la masa en g y la masa molar en g/mol.".to_string(),
    }
}

fn density_explain() -> String {
    "La densidad ρ relaciona la masa de una sustancia con el volumen que ocupa:\n  ρ = m / V\n\n\
     En química se usa mucho g/mL o g/cm³; m en gramos y V en mL o cm³."
        .to_string()
}

fn density_example() -> Example {
    let rho = 10.0_f64 / 5.0;
    Example {
        statement: "Ejemplo: una muestra tiene 10 g de masa y 5 mL de volumen. Calcula la densidad."
            .to_string(),
        solution: format!(
            "Aplicamos ρ = m / V:\n  ρ = 10 g / 5 mL = 2 g/mL.\n\n\
             Resultado numérico: ρ = {rho:.3} g/mL."
        ),
    }
}

fn density_exercise() -> Exercise {
    let (m, v) = pick(&[(50, 25), (125, 100), (84, 42), (63, 21), (180, 90)]);
    Exercise {
        statement: format!(
            "Una sustancia tiene masa m = {m} g y ocupa un volumen V = {v} mL.\n\
             Calcula la densidad ρ en g/mL."
        ),
        expected: f64::from(m) / f64::from(v),
        unit: "g/mL".to_string(),
        hint: "Divide masa entre volumen: ρ = m / V.".to_string(),
    }
}

fn dilution_explain() -> String {
    "Al diluir se conserva la cantidad de soluto, así que:\n  M1 · V1 = M2 · V2\n\n\
     M1 y V1 son la concentración y el volumen iniciales; M2 y V2 los finales.\n\
     Conociendo tres variables se despeja la cuarta:\n\
     \x20 M2 = M1·V1 / V2,   V2 = M1·V1 / M2,   V1 = M2·V2 / M1."
        .to_string()
}

fn dilution_example() -> Example {
    let m2 = 2.0_f64 * 25.0 / 100.0;
    Example {
        statement: "Ejemplo: se diluyen 25 mL de una solución 2.0 M hasta 100 mL.\n\
                    Calcula la nueva concentración M2."
            .to_string(),
        solution: format!(
            "De M1·V1 = M2·V2 despejamos M2:\n  M2 = M1·V1 / V2 = 2.0·25 / 100 = 0.5 M.\n\n\
             Resultado numérico: M2 = {m2:.3} M."
        ),
    }
}

#[derive(Debug, Clone, Copy)]
enum DilutionUnknown {
    FinalConcentration,
    FinalVolume,
    InitialVolume,
}

fn dilution_exercise() -> Exercise {
    match pick(&[
        DilutionUnknown::FinalConcentration,
        DilutionUnknown::FinalVolume,
        DilutionUnknown::InitialVolume,
    ]) {
        DilutionUnknown::FinalConcentration => {
            let (m1, v1, v2) = (1.5_f64, 40.0_f64, 200.0_f64);
            Exercise {
                statement: format!(
                    "Se diluyen {v1:.0} mL de una solución {m1:.1} M hasta un volumen final \
                     de {v2:.0} mL.\nCalcula la nueva concentración M2."
                ),
                expected: m1 * v1 / v2,
                unit: "M".to_string(),
                hint: "Despeja M2 = M1·V1 / V2.".to_string(),
            }
        }
        DilutionUnknown::FinalVolume => {
            let (m1, v1, m2) = (3.0_f64, 20.0_f64, 0.5_f64);
            Exercise {
                statement: format!(
                    "Tienes {v1:.0} mL de una solución {m1:.1} M y quieres una solución {m2:.1} M.\n\
                     ¿Hasta qué volumen final V2 debes diluir?"
                ),
                expected: m1 * v1 / m2,
                unit: "mL".to_string(),
                hint: "Despeja V2 = M1·V1 / M2.".to_string(),
            }
        }
        DilutionUnknown::InitialVolume => {
            let (m1, v2, m2) = (1.2_f64, 150.0_f64, 0.4_f64);
            Exercise {
                statement: format!(
                    "Quieres preparar {v2:.0} mL de una solución {m2:.1} M a partir de una \
                     solución {m1:.1} M.\n¿Qué volumen V1 de la solución concentrada necesitas?"
                ),
                expected: m2 * v2 / m1,
                unit: "mL".to_string(),
                hint: "Despeja V1 = M2·V2 / M1.".to_string(),
            }
        }
    }
}
