//! Noyau — évaluation (pipeline réel)
//!
//! nettoyage -> jetons -> RPN (shunting-yard) -> pile de valeurs
//!
//! Chaque appel possède ses propres jetons, piles et file : aucun état
//! partagé, donc appelable depuis plusieurs threads sans verrou.

use tracing::debug;

use super::erreur::Result;
use super::jetons::{clean_expression, format_tokens, tokenize};
use super::rpn::{evaluate_postfix, format_postfix, to_postfix};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub nettoyee: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression infixe.
///
/// La première erreur (jetons, parenthèses, pile, division) remonte telle
/// quelle ; jamais de résultat partiel.
pub fn solve_simplification(expression: &str) -> Result<f64> {
    let jetons = tokenize(expression)?;
    let rpn = to_postfix(&jetons)?;
    let valeur = evaluate_postfix(&rpn)?;

    debug!(expression, valeur, "expression évaluée");
    Ok(valeur)
}

/// Comme [`solve_simplification`], mais retourne aussi la démarche
/// (entrée nettoyée, jetons, RPN) pour l’affichage.
pub fn eval_expression(expression: &str) -> Result<(f64, Demarche)> {
    // 1) Jetons
    let jetons = tokenize(expression)?;

    // 2) RPN
    let rpn = to_postfix(&jetons)?;

    // 3) Valeur
    let valeur = evaluate_postfix(&rpn)?;

    let d = Demarche {
        nettoyee: clean_expression(expression),
        jetons: format_tokens(&jetons),
        rpn: format_postfix(&rpn),
    };
    debug!(expression, rpn = %d.rpn, valeur, "expression évaluée");

    Ok((valeur, d))
}
