//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (opération binaire, expression,
//! résultats, erreurs, démarche) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::Operator;

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub nettoyee: String,
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- opération binaire (trois champs) ---
    pub premier: String,
    pub operateur: Operator,
    pub second: String,
    pub resultat_binaire: String,
    pub erreur_binaire: String,

    // --- expression infixe ---
    pub entree: String,
    pub resultat: String, // valeur formatée (vide si rien / erreur)
    pub erreur: String,   // message d’erreur (si parsing/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            premier: String::new(),
            operateur: Operator::Addition,
            second: String::new(),
            resultat_binaire: String::new(),
            erreur_binaire: String::new(),
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (les deux panneaux).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur (expression).
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran”
    /// sur une faute ; la démarche, elle, n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultats(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Panneau binaire : erreur (le résultat précédent est effacé).
    pub fn set_erreur_binaire(&mut self, msg: impl Into<String>) {
        self.erreur_binaire = msg.into();
        self.resultat_binaire.clear();
    }

    pub fn set_resultat_binaire(&mut self, resultat: impl Into<String>) {
        self.erreur_binaire.clear();
        self.resultat_binaire = resultat.into();
    }
}
