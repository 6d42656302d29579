use crate::quiz::catalog::{pick, Area, Example, Exercise, Topic};

pub const TOPICS: &[Topic] = &[
    Topic {
        area: Area::Math,
        name: "Ecuación lineal (ax + b = 0)",
        explain: linear_explain,
        example: linear_example,
        exercise: linear_exercise,
    },
    Topic {
        area: Area::Math,
        name: "Ecuación cuadrática",
        explain: quadratic_explain,
        example: quadratic_example,
        exercise: quadratic_exercise,
    },
    Topic {
        area: Area::Math,
        name: "Pitágoras (c² = a² + b²)",
        explain: pythagoras_explain,
        example: pythagoras_example,
        exercise: pythagoras_exercise,
    },
    Topic {
        area: Area::Math,
        name: "Pendiente entre puntos",
        explain: slope_explain,
        example: slope_example,
        exercise: slope_exercise,
    },
];

fn linear_explain() -> String {
    "Ecuación lineal en una variable:\n  a·x + b = 0 con a ≠ 0.\n\n\
     Se trata de dejar x sola en un lado:\n  a·x + b = 0  →  a·x = -b  →  x = -b / a.\n\
     Cuida los signos y nunca dividas entre cero."
        .to_string()
}

fn linear_example() -> Example {
    let (a, b) = (2.0_f64, -6.0_f64);
    let x = -b / a;
    Example {
        statement: "Ejemplo: resuelve 2x - 6 = 0.".to_string(),
        solution: format!(
            "Pasamos el -6 al otro lado: 2x = 6.\n\
             Dividimos entre 2: x = 6 / 2 = 3.\n\n\
             Resultado numérico: x = {x:.3}."
        ),
    }
}

fn linear_exercise() -> Exercise {
    let (a, b) = pick(&[(3, 9), (-4, 8), (7, -21), (5, -10), (-6, 18), (9, -27)]);
    Exercise {
        statement: format!("Resuelve la ecuación {a}x {b:+} = 0. Escribe el valor de x."),
        expected: -f64::from(b) / f64::from(a),
        unit: String::new(),
        hint: "Aísla x: pasa el término independiente al otro lado y divide entre a.".to_string(),
    }
}

fn quadratic_explain() -> String {
    "Ecuación cuadrática general:\n  a·x² + b·x + c = 0 con a ≠ 0.\n\n\
     Las soluciones salen de la fórmula general:\n  x = [-b ± √(b² - 4ac)] / (2a).\n\n\
     El término b² - 4ac es el discriminante D.\n\
     Con D > 0 hay dos raíces reales distintas, con D = 0 una raíz doble \
     y con D < 0 las soluciones son complejas."
        .to_string()
}

fn quadratic_example() -> Example {
    let (a, b, c) = (1.0_f64, -3.0_f64, 2.0_f64);
    let d = b * b - 4.0 * a * c;
    let x1 = (-b - d.sqrt()) / (2.0 * a);
    let x2 = (-b + d.sqrt()) / (2.0 * a);
    Example {
        statement: "Ejemplo: resuelve x² - 3x + 2 = 0.".to_string(),
        solution: format!(
            "Identificamos a = 1, b = -3, c = 2.\n\
             D = b² - 4ac = 9 - 8 = 1.\n\
             Las raíces son x = [3 ± √1] / 2 → x1 = 1, x2 = 2.\n\n\
             Resultado numérico: x1 = {x1:.3}, x2 = {x2:.3}."
        ),
    }
}

fn quadratic_exercise() -> Exercise {
    let (a, b, c) = pick(&[(1, -5, 6), (2, 5, -3), (1, -4, 3), (1, -2, -8)]);
    let d = f64::from(b * b - 4 * a * c).max(0.0);
    let smaller = (-f64::from(b) - d.sqrt()) / (2.0 * f64::from(a));
    Exercise {
        statement: format!(
            "Resuelve {a}x² {b:+}x {c:+} = 0 y escribe la raíz más pequeña (xₘᵢₙ)."
        ),
        expected: smaller,
        unit: String::new(),
        hint: "Usa la fórmula general y toma la raíz con el signo menos en el numerador."
            .to_string(),
    }
}

fn pythagoras_explain() -> String {
    "En un triángulo rectángulo, la hipotenusa c y los catetos a y b cumplen:\n  c² = a² + b².\n\n\
     Con los dos catetos, la hipotenusa es c = √(a² + b²).\n\
     Con c y un cateto, se despeja el otro."
        .to_string()
}

fn pythagoras_example() -> Example {
    let c = (6.0_f64 * 6.0 + 8.0 * 8.0).sqrt();
    Example {
        statement: "Ejemplo: un triángulo rectángulo tiene catetos de 6 y 8. Calcula la hipotenusa."
            .to_string(),
        solution: format!(
            "Aplicamos c = √(a² + b²):\n  c = √(6² + 8²) = √(36 + 64) = √100 = 10.\n\n\
             Resultado numérico: c = {c:.3}."
        ),
    }
}

fn pythagoras_exercise() -> Exercise {
    let (a, b) = pick(&[(3, 4), (5, 12), (7, 24), (9, 40), (8, 15), (12, 16)]);
    let c = f64::from(a * a + b * b).sqrt();
    Exercise {
        statement: format!(
            "En un triángulo rectángulo los catetos miden a = {a} y b = {b}. Calcula la hipotenusa c."
        ),
        expected: c,
        unit: String::new(),
        hint: "Eleva cada cateto al cuadrado, suma y saca la raíz cuadrada.".to_string(),
    }
}

fn slope_explain() -> String {
    "La pendiente m de la recta que pasa por (x₁, y₁) y (x₂, y₂) es:\n  m = (y₂ - y₁) / (x₂ - x₁).\n\n\
     Comprueba antes que x₂ ≠ x₁ para no dividir entre cero."
        .to_string()
}

fn slope_example() -> Example {
    let m = (10.0_f64 - 2.0) / (5.0 - 1.0);
    Example {
        statement: "Ejemplo: calcula la pendiente de la recta que pasa por (1, 2) y (5, 10)."
            .to_string(),
        solution: format!(
            "Diferencias: Δy = 10 - 2 = 8 y Δx = 5 - 1 = 4.\n\
             Entonces m = Δy / Δx = 8 / 4 = 2.\n\n\
             Resultado numérico: m = {m:.3}."
        ),
    }
}

fn slope_exercise() -> Exercise {
    let (x1, y1, x2, y2) = pick(&[
        (0, 0, 4, 6),
        (-2, 3, 1, 12),
        (2, -1, 8, 5),
        (-3, -2, 4, 7),
        (1, 5, 7, 17),
    ]);
    Exercise {
        statement: format!(
            "Calcula la pendiente m de la recta que pasa por ({x1}, {y1}) y ({x2}, {y2})."
        ),
        expected: f64::from(y2 - y1) / f64::from(x2 - x1),
        unit: String::new(),
        hint: "Resta primero las y, luego las x, y divide: m = Δy / Δx.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_solution_satisfies_equation() {
        for _ in 0..30 {
            let exercise = linear_exercise();
            assert!([-3.0, 2.0, 3.0, 2.0, 3.0, 3.0].contains(&exercise.expected));
        }
    }

    #[test]
    fn quadratic_picks_smaller_root() {
        for _ in 0..30 {
            let exercise = quadratic_exercise();
            assert!([2.0, -3.0, 1.0, -2.0].contains(&exercise.expected));
        }
    }

    #[test]
    fn pythagoras_hypotenuse_is_integral() {
        for _ in 0..30 {
            let c = pythagoras_exercise().expected;
            assert_eq!(c, c.round());
        }
    }

    #[test]
    fn slope_statement_mentions_points() {
        let exercise = slope_exercise();
        assert!(exercise.statement.contains("pendiente"));
        assert!(exercise.expected > 0.0);
    }
}
