//! Noyau d’évaluation infixe
//!
//! Organisation interne :
//! - erreur.rs     : EvaluationError (une variante par cause)
//! - operations.rs : add / subtract / multiply / divide via négation + réciproque
//! - operateur.rs  : Operator (symbole, priorité) + chemin binaire calculate_results
//! - jetons.rs     : nettoyage + tokenisation (moins unaire)
//! - rpn.rs        : shunting-yard + évaluation postfixée
//! - format.rs     : affichage des résultats
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateur;
pub mod operations;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{EvaluationError, Result};
pub use eval::{eval_expression, solve_simplification, Demarche};
pub use format::format_result;
pub use operateur::{calculate_results, Operator};
