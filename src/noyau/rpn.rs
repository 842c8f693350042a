// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Token en RPN (postfix)
// - Puis évaluer la RPN avec une pile de réels
//
// Règles:
// - Associativité à gauche : à priorité égale, on dépile ("8-3-2" => "8 3 - 2 -").
// - Les parenthèses ne sortent jamais dans la RPN.
// - Le convertisseur ne vérifie PAS l’arité : "1++2" passe ici,
//   l’évaluation échoue ensuite (pile insuffisante).

use tracing::trace;

use super::erreur::{EvaluationError, Result};
use super::jetons::Token;
use super::operateur::Operator;

/// Élément de la file de sortie (forme postfixée).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element {
    Number(f64),
    Operator(Operator),
}

/// Contenu de la pile d’opérateurs pendant la conversion.
#[derive(Clone, Copy, Debug)]
enum Empile {
    Operator(Operator),
    LeftParen,
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [5, *, 6, /, (, 7, +, 8, ), -, 9]
///   rpn:    [5, 6, *, 7, 8, +, /, 9, -]
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Element>> {
    let mut out: Vec<Element> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Empile> = Vec::new();

    for tok in tokens {
        match tok {
            Token::PositiveNumber(texte) | Token::NegativeNumber(texte) => {
                let v: f64 = texte
                    .parse()
                    .map_err(|_| EvaluationError::InvalidExpression)?;
                out.push(Element::Number(v));
            }

            Token::Operator(op) => {
                // dépile tant que le sommet est un opérateur de priorité >= (pas une '(')
                while let Some(Empile::Operator(top)) = ops.last().copied() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    out.push(Element::Operator(top));
                }
                ops.push(Empile::Operator(*op));
            }

            Token::LeftParen => ops.push(Empile::LeftParen),

            Token::RightParen => {
                // dépile jusqu’à '(' ; pile vide avant => ')' en trop
                loop {
                    match ops.pop() {
                        Some(Empile::Operator(top)) => out.push(Element::Operator(top)),
                        Some(Empile::LeftParen) => break,
                        None => return Err(EvaluationError::MismatchedRightParenthesis),
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        match top {
            Empile::Operator(op) => out.push(Element::Operator(op)),
            Empile::LeftParen => return Err(EvaluationError::MismatchedLeftParenthesis),
        }
    }

    trace!(elements = out.len(), "conversion postfixée terminée");
    Ok(out)
}

/// Évalue une RPN.
///
/// - nombre => empilé
/// - opérateur => dépile droite puis gauche, applique, empile le résultat
/// - fin => exactement une valeur, sinon `InvalidExpression`
pub fn evaluate_postfix(postfix: &[Element]) -> Result<f64> {
    let mut st: Vec<f64> = Vec::with_capacity(postfix.len());

    for el in postfix {
        match *el {
            Element::Number(v) => st.push(v),
            Element::Operator(op) => {
                let second = st.pop().ok_or(EvaluationError::InvalidExpression)?;
                let first = st.pop().ok_or(EvaluationError::InvalidExpression)?;
                st.push(op.apply(first, second)?);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(EvaluationError::InvalidExpression),
    }
}

/// Format utilitaire (“démarche”) : RPN en texte.
pub fn format_postfix(postfix: &[Element]) -> String {
    postfix
        .iter()
        .map(|el| match el {
            Element::Number(v) => format!("{v}"),
            Element::Operator(op) => op.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
