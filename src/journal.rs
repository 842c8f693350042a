// src/journal.rs
//
// Journalisation (tracing) : une seule couche fmt vers stderr.
// stdout reste réservé au contrat “Result = …” de la console.

use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::Layer,
    prelude::*,
};

/// Cible des événements émis par ce crate.
const CIBLE: &str = "calculatrice_infixe";

/// 0 => WARN, 1 => INFO, 2 => DEBUG, 3+ => TRACE.
pub fn niveau_pour(verbosite: u8) -> LevelFilter {
    match verbosite {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installe le subscriber global. Sans effet si un autre est déjà installé.
pub fn init_journal(verbosite: u8) {
    let filtre = Targets::new()
        .with_default(LevelFilter::WARN)
        .with_target(CIBLE, niveau_pour(verbosite));

    let _ = tracing_subscriber::registry()
        .with(
            Layer::new()
                .with_ansi(false)
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(filtre),
        )
        .try_init();
}
