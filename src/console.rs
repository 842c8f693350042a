// src/console.rs
//
// Calculatrice console (clap)
// ---------------------------
// Sous-commandes :
// - binary  <a> <op> <b> : une seule opération (calculate_results)
// - general <expression> : expression infixe complète (solve_simplification)
// - gui                  : interface egui (natif)
//
// Contrat de sortie (géré par main.rs) :
// - succès : "Result = <valeur>" sur stdout
// - échec  : "Error: <message>" sur stderr, code de sortie non nul

use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use crate::noyau::{calculate_results, format_result, solve_simplification, Operator, Result};

/// Calculatrice pour console.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// Verbosité du journal sur stderr (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub commande: Commande,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commande {
    /// Opération binaire de base.
    #[command(allow_negative_numbers = true)]
    Binary {
        /// Premier nombre.
        first_number: f64,
        /// Opérateur arithmétique (+, -, *, /).
        operator: Operator,
        /// Second nombre.
        second_number: f64,
    },

    /// Expression infixe standard (ex: "5 * 6 / (7 + 8) - 9").
    General {
        /// Expression infixe (peut commencer par '-').
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Interface graphique (opération binaire + expression).
    Gui,
}

/// Exécute une commande de calcul et retourne la ligne à afficher.
///
/// `None` pour `Gui` : ce n’est pas un calcul, main.rs lance l’interface.
pub fn executer(commande: &Commande) -> Option<Result<String>> {
    let valeur = match commande {
        Commande::Binary {
            first_number,
            operator,
            second_number,
        } => calculate_results(*first_number, *operator, *second_number),
        Commande::General { expression } => solve_simplification(expression),
        Commande::Gui => return None,
    };

    Some(valeur.map(|v| {
        info!(?commande, valeur = v, "calcul terminé");
        format!("Result = {}", format_result(v))
    }))
}
