//! Calculatrice infixe
//!
//! - noyau   : tokenisation, shunting-yard, évaluation postfixée (sans I/O)
//! - console : sous-commandes clap (binary / general / gui)
//! - app     : interface egui (natif + web)
//! - journal : subscriber tracing vers stderr

pub mod app;
pub mod console;
pub mod journal;
pub mod noyau;

pub use noyau::{calculate_results, solve_simplification, EvaluationError, Operator};
