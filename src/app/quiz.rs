use crate::model::Quiz;

/// Resultado de una pregunta tras pulsar "Terminar".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Unanswered,
    Incorrect { correct_option: String },
    Correct,
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Unanswered => "❓ No se eligió respuesta".to_string(),
            Feedback::Incorrect { correct_option } => {
                format!("❌ Incorrecto. La respuesta correcta: {correct_option}")
            }
            Feedback::Correct => "✅ Correcto".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub feedback: Vec<Feedback>,
    pub correct: usize,
    pub total: usize,
}

impl QuizOutcome {
    pub fn summary(&self) -> String {
        format!(
            "Respondiste bien {} de {} preguntas.",
            self.correct, self.total
        )
    }
}

/// Puntúa las selecciones actuales. Determinista: mismas selecciones, mismo resultado.
///
/// `answer` debe apuntar a una opción existente: `data::validate_lesson` rechaza
/// la lección al cargarla si no es así.
pub fn score(quiz: &Quiz, selections: &[Option<usize>]) -> QuizOutcome {
    let mut correct = 0;
    let feedback = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| match selections.get(i).copied().flatten() {
            None => Feedback::Unanswered,
            Some(selected) if selected == q.answer => {
                correct += 1;
                Feedback::Correct
            }
            Some(_) => Feedback::Incorrect {
                correct_option: q.options[q.answer].clone(),
            },
        })
        .collect();

    QuizOutcome {
        feedback,
        correct,
        total: quiz.questions.len(),
    }
}

/// Formulario de un quiz: una selección por pregunta y el feedback de la última corrección.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizForm {
    pub quiz: Quiz,
    pub selections: Vec<Option<usize>>,
    pub outcome: Option<QuizOutcome>,
}

impl QuizForm {
    pub fn new(quiz: Quiz) -> Self {
        let selections = vec![None; quiz.questions.len()];
        Self {
            quiz,
            selections,
            outcome: None,
        }
    }

    pub fn select(&mut self, question: usize, option: usize) {
        if let Some(slot) = self.selections.get_mut(question) {
            *slot = Some(option);
        }
    }

    /// Se puede pulsar varias veces; siempre recalcula desde las selecciones actuales.
    pub fn finish(&mut self) -> &QuizOutcome {
        self.outcome.insert(score(&self.quiz, &self.selections))
    }

    pub fn feedback_for(&self, question: usize) -> Option<&Feedback> {
        self.outcome.as_ref()?.feedback.get(question)
    }
}
