// src/noyau/operateur.rs
//
// Vocabulaire des opérateurs : symbole, priorité, fonction binaire.
// Ensemble fermé => `match` exhaustif partout (priorités, évaluation).

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::erreur::{EvaluationError, Result};
use super::operations::{add, divide, multiply, subtract};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operator {
    /// Ordre d’affichage (sélecteur GUI, aide CLI).
    pub const ALL: [Operator; 4] = [
        Operator::Addition,
        Operator::Subtraction,
        Operator::Multiplication,
        Operator::Division,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Addition => '+',
            Operator::Subtraction => '-',
            Operator::Multiplication => '*',
            Operator::Division => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Addition),
            '-' => Some(Operator::Subtraction),
            '*' => Some(Operator::Multiplication),
            '/' => Some(Operator::Division),
            _ => None,
        }
    }

    /// 1 = addition/soustraction, 2 = multiplication/division.
    /// (Les parenthèses ont la priorité 0 et ne sont jamais des `Operator`.)
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Addition | Operator::Subtraction => 1,
            Operator::Multiplication | Operator::Division => 2,
        }
    }

    /// Applique l’opération : `first` à gauche, `second` à droite.
    pub fn apply<T: Float>(self, first: T, second: T) -> Result<T> {
        match self {
            Operator::Addition => Ok(add(first, second)),
            Operator::Subtraction => Ok(subtract(first, second)),
            Operator::Multiplication => Ok(multiply(first, second)),
            Operator::Division => divide(first, second),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_symbol(c).ok_or_else(|| EvaluationError::InvalidOperator(t.into()))
            }
            _ => Err(EvaluationError::InvalidOperator(t.into())),
        }
    }
}

/// Chemin “binaire seulement” : une opération, sans tokenisation.
///
/// La division par zéro est refusée avant tout calcul.
pub fn calculate_results<T: Float>(first: T, operator: Operator, second: T) -> Result<T> {
    if operator == Operator::Division && second.is_zero() {
        return Err(EvaluationError::DivisionByZero);
    }
    operator.apply(first, second)
}
