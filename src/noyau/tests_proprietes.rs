//! Tests de propriétés (proptest) : lois d’inverse + aller-retour infixe.
//!
//! - lois : a - b == a + (-b), a / b == a * (1/b), a + (-a) == 0, b * (1/b) ≈ 1
//! - parenthèses : '(' en trop => gauche non appariée, ')' en trop => droite
//! - aller-retour : on génère un arbre, on l’écrit en infixe avec le minimum
//!   de parenthèses, on relit avec solve_simplification et on compare à
//!   l’évaluation directe de l’arbre (mêmes opérations, même ordre => égalité exacte).

use proptest::prelude::*;

use super::erreur::EvaluationError;
use super::operateur::Operator;
use super::operations::{add, divide, multiply, negate, reciprocal, subtract};
use super::solve_simplification;

/* ------------------------ Arbres d’expressions ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Nombre(String, f64),
    Binaire(Box<Arbre>, Operator, Box<Arbre>),
}

fn nombre() -> impl Strategy<Value = Arbre> {
    (any::<bool>(), 0u32..1000, proptest::option::of(0u32..100)).prop_map(|(neg, ent, frac)| {
        let signe = if neg { "-" } else { "" };
        let texte = match frac {
            Some(f) => format!("{signe}{ent}.{f}"),
            None => format!("{signe}{ent}"),
        };
        let v: f64 = texte.parse().expect("littéral généré invalide");
        Arbre::Nombre(texte, v)
    })
}

fn operateur() -> impl Strategy<Value = Operator> {
    proptest::sample::select(Operator::ALL.to_vec())
}

fn arbre() -> impl Strategy<Value = Arbre> {
    nombre().prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), operateur(), inner)
            .prop_map(|(a, op, b)| Arbre::Binaire(Box::new(a), op, Box::new(b)))
    })
}

fn priorite(a: &Arbre) -> u8 {
    match a {
        Arbre::Nombre(..) => u8::MAX,
        Arbre::Binaire(_, op, _) => op.precedence(),
    }
}

/// Infixe minimal : à gauche, parenthèses si priorité strictement plus faible ;
/// à droite, dès que la priorité est <= (associativité à gauche).
fn rendu(a: &Arbre) -> String {
    match a {
        Arbre::Nombre(texte, _) => texte.clone(),
        Arbre::Binaire(g, op, d) => {
            let p = op.precedence();
            let gs = if priorite(g) < p {
                format!("({})", rendu(g))
            } else {
                rendu(g)
            };
            let ds = if priorite(d) <= p {
                format!("({})", rendu(d))
            } else {
                rendu(d)
            };
            format!("{gs} {op} {ds}")
        }
    }
}

fn valeur(a: &Arbre) -> Result<f64, EvaluationError> {
    match a {
        Arbre::Nombre(_, v) => Ok(*v),
        Arbre::Binaire(g, op, d) => {
            let x = valeur(g)?;
            let y = valeur(d)?;
            op.apply(x, y)
        }
    }
}

/* ------------------------ Propriétés ------------------------ */

fn reel() -> impl Strategy<Value = f64> {
    -1e12..1e12f64
}

fn reel_non_nul() -> impl Strategy<Value = f64> {
    reel().prop_filter("loin de zéro", |b| b.abs() > 1e-9)
}

proptest! {
    #[test]
    fn soustraction_par_negation(a in reel(), b in reel()) {
        prop_assert_eq!(add(a, negate(b)), subtract(a, b));
    }

    #[test]
    fn division_par_reciproque(a in reel(), b in reel_non_nul()) {
        prop_assert_eq!(Ok(multiply(a, reciprocal(b).unwrap())), divide(a, b));
    }

    #[test]
    fn inverse_additif(a in reel()) {
        prop_assert_eq!(add(a, negate(a)), 0.0);
    }

    #[test]
    fn inverse_multiplicatif(b in reel_non_nul()) {
        let un = multiply(b, reciprocal(b).unwrap());
        prop_assert!((un - 1.0).abs() <= 4.0 * f64::EPSILON, "b={} => {}", b, un);
    }

    #[test]
    fn division_par_zero_toujours_refusee(x in reel()) {
        prop_assert_eq!(divide(x, 0.0), Err(EvaluationError::DivisionByZero));
        prop_assert_eq!(divide(x, -0.0), Err(EvaluationError::DivisionByZero));
    }

    #[test]
    fn aller_retour_infixe(a in arbre()) {
        let texte = rendu(&a);
        prop_assert_eq!(solve_simplification(&texte), valeur(&a), "texte={}", texte);
    }

    #[test]
    fn aller_retour_sans_espaces(a in arbre()) {
        let texte: String = rendu(&a).chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(solve_simplification(&texte), valeur(&a), "texte={}", texte);
    }

    #[test]
    fn parenthese_gauche_en_trop(a in arbre()) {
        let texte = format!("({}", rendu(&a));
        prop_assert_eq!(
            solve_simplification(&texte),
            Err(EvaluationError::MismatchedLeftParenthesis)
        );
    }

    #[test]
    fn parenthese_droite_en_trop(a in arbre()) {
        let texte = format!("{})", rendu(&a));
        prop_assert_eq!(
            solve_simplification(&texte),
            Err(EvaluationError::MismatchedRightParenthesis)
        );
    }
}

#[test]
fn rendu_respecte_les_priorites() {
    let n = |v: f64| Box::new(Arbre::Nombre(format!("{v}"), v));
    // 8 - (3 - 2) : la parenthèse de droite est obligatoire
    let a = Arbre::Binaire(
        n(8.0),
        Operator::Subtraction,
        Box::new(Arbre::Binaire(n(3.0), Operator::Subtraction, n(2.0))),
    );
    assert_eq!(rendu(&a), "8 - (3 - 2)");
    assert_eq!(solve_simplification(&rendu(&a)), Ok(7.0));
}
