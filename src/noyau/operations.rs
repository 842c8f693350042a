// src/noyau/operations.rs
//
// Bibliothèque d’opérations binaires sur les réels.
//
// Seules `add` et `multiply` calculent vraiment ; `subtract` et `divide`
// passent par les inverses (négation, réciproque) :
//   a - b = a + (-b)
//   a / b = a * (1/b)
// Les lois d’inverse restent ainsi testables une par une.

use num_traits::Float;

use super::erreur::{EvaluationError, Result};

/// Inverse additif. Ne peut pas échouer.
pub fn negate<T: Float>(x: T) -> T {
    -x
}

/// Inverse multiplicatif.
///
/// Égalité exacte avec zéro (pas de tolérance) : `-0.0` est aussi refusé.
pub fn reciprocal<T: Float>(x: T) -> Result<T> {
    if x.is_zero() {
        return Err(EvaluationError::DivisionByZero);
    }
    Ok(T::one() / x)
}

pub fn add<T: Float>(a: T, b: T) -> T {
    a + b
}

pub fn subtract<T: Float>(a: T, b: T) -> T {
    add(a, negate(b))
}

pub fn multiply<T: Float>(a: T, b: T) -> T {
    a * b
}

pub fn divide<T: Float>(a: T, b: T) -> Result<T> {
    Ok(multiply(a, reciprocal(b)?))
}
