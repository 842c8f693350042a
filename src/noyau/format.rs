// src/noyau/format.rs

/// Affichage d’un résultat : représentation la plus courte qui relit la même
/// valeur, avec toujours une partie décimale pour les entiers ("-7.0", "3.0").
/// Très grands / très petits : notation scientifique ("1e20", "1e-7").
pub fn format_result(v: f64) -> String {
    format!("{v:?}")
}
