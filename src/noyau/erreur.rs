// src/noyau/erreur.rs
//
// Erreurs du noyau (une variante par cause, jamais de String “fourre-tout”).
// La première erreur détectée remonte telle quelle jusqu’à l’appelant.

use std::collections::BTreeSet;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvaluationError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Caractères hors alphabet (chiffres, '.', + - * /, parenthèses).
    #[error("caractères non supportés: {}", format_caracteres(.0))]
    UnsupportedCharacter(BTreeSet<char>),

    #[error("parenthèse gauche non appariée")]
    MismatchedLeftParenthesis,

    #[error("parenthèse droite non appariée")]
    MismatchedRightParenthesis,

    #[error("division par zéro")]
    DivisionByZero,

    /// Trop peu ou trop d’opérandes pour les opérateurs présents.
    #[error("expression invalide")]
    InvalidExpression,

    /// Chemin binaire seulement : symbole hors {+, -, *, /}.
    #[error("opérateur invalide: '{0}'")]
    InvalidOperator(String),

    /// Portion de l’entrée nettoyée qui ne forme aucun jeton (ex: "5." ou ".5").
    #[error("nombre mal formé en position {position}: '{fragment}'")]
    MalformedNumber { position: usize, fragment: String },
}

fn format_caracteres(set: &BTreeSet<char>) -> String {
    set.iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
