// src/noyau/jetons.rs

use std::collections::BTreeSet;

use tracing::trace;

use super::erreur::{EvaluationError, Result};
use super::operateur::Operator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    PositiveNumber(String),

    // Texte avec son '-' (ex: "-15") : moins unaire collé au littéral.
    NegativeNumber(String),

    Operator(Operator),

    LeftParen,
    RightParen,
}

/// Alphabet après nettoyage : chiffres, '.', opérateurs, parenthèses.
fn est_supporte(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '(' || c == ')' || Operator::from_symbol(c).is_some()
}

/// Retire TOUS les blancs (et seulement eux).
pub fn clean_expression(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Tokenize une expression infixe.
///
/// Étapes :
/// - nettoyage des blancs
/// - rejet en bloc des caractères hors alphabet (ensemble trié)
/// - balayage gauche -> droite, par position :
///   nombre négatif, nombre positif, opérateur, '(' , ')'
///
/// Un '-' suivi d’un chiffre est un nombre négatif seulement s’il ne suit
/// ni un chiffre ni ')' : "2-3" => 2, -, 3 ; "2*-3" => 2, *, -3.
///
/// Couverture totale : toute portion qui ne commence aucun jeton (un '.'
/// isolé, "5.", ".5") échoue avec `MalformedNumber`.
pub fn tokenize(raw: &str) -> Result<Vec<Token>> {
    let clean = clean_expression(raw);

    let hors_alphabet: BTreeSet<char> = clean.chars().filter(|&c| !est_supporte(c)).collect();
    if !hors_alphabet.is_empty() {
        return Err(EvaluationError::UnsupportedCharacter(hors_alphabet));
    }

    let chars: Vec<char> = clean.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre négatif (moins unaire)
        if c == '-' {
            let precedent = if i == 0 { None } else { Some(chars[i - 1]) };
            let apres_valeur = matches!(precedent, Some(p) if p.is_ascii_digit() || p == ')');
            if !apres_valeur {
                if let Some(fin) = scan_nombre(&chars, i + 1) {
                    out.push(Token::NegativeNumber(chars[i..fin].iter().collect()));
                    i = fin;
                    continue;
                }
            }
        }

        // Nombre positif
        if let Some(fin) = scan_nombre(&chars, i) {
            out.push(Token::PositiveNumber(chars[i..fin].iter().collect()));
            i = fin;
            continue;
        }

        // Opérateurs
        if let Some(op) = Operator::from_symbol(c) {
            out.push(Token::Operator(op));
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Token::LeftParen);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Token::RightParen);
            i += 1;
            continue;
        }

        // Reste : '.' qui ne suit pas un nombre complet.
        let debut = i;
        while i < chars.len() && chars[i] == '.' {
            i += 1;
        }
        return Err(EvaluationError::MalformedNumber {
            position: debut,
            fragment: chars[debut..i].iter().collect(),
        });
    }

    trace!(jetons = out.len(), "tokenisation terminée");
    Ok(out)
}

/// Littéral `\d+(\.\d+)?` à partir de `debut` ; renvoie l’indice de fin (exclu).
/// Un '.' sans chiffre derrière n’est pas consommé.
fn scan_nombre(chars: &[char], debut: usize) -> Option<usize> {
    let mut i = debut;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == debut {
        return None;
    }

    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    Some(i)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Token::PositiveNumber(n) | Token::NegativeNumber(n) => n.clone(),
            Token::Operator(op) => op.to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
