// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Deux panneaux :
// - Opération binaire : premier nombre, opérateur, second nombre => calculate_results
// - Expression infixe : entrée libre => eval_expression (+ démarche)
//
// Clavier : Enter évalue (quand le champ expression est focus).

use eframe::egui;
use tracing::debug;

use super::etat::{AppCalc, Demarche};
use crate::noyau::{calculate_results, eval_expression, format_result, Operator};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(super::TITRE_APP);
                ui.add_space(6.0);

                self.ui_binaire(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                self.ui_demarche(ui);
            });
    }

    /* ------------------------ Panneau binaire ------------------------ */

    fn ui_binaire(&mut self, ui: &mut egui::Ui) {
        ui.label("Opération binaire :");

        egui::Grid::new("grille_binaire")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Premier nombre");
                ui.add(
                    egui::TextEdit::singleline(&mut self.premier)
                        .id_salt("premier_nombre")
                        .desired_width(160.0),
                );
                ui.end_row();

                ui.label("Opérateur");
                egui::ComboBox::from_id_salt("operateur_binaire")
                    .selected_text(self.operateur.to_string())
                    .show_ui(ui, |ui| {
                        for op in Operator::ALL {
                            ui.selectable_value(&mut self.operateur, op, op.to_string());
                        }
                    });
                ui.end_row();

                ui.label("Second nombre");
                ui.add(
                    egui::TextEdit::singleline(&mut self.second)
                        .id_salt("second_nombre")
                        .desired_width(160.0),
                );
                ui.end_row();
            });

        if ui
            .add_sized([96.0, 30.0], egui::Button::new("Calculer"))
            .clicked()
        {
            self.calcul_binaire();
        }

        if !self.resultat_binaire.is_empty() {
            Self::champ_monospace(ui, "resultat_binaire", &self.resultat_binaire, 1);
        }
        if !self.erreur_binaire.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur_binaire);
        }
    }

    /* ------------------------ Panneau expression ------------------------ */

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 5 * 6 / (7 + 8) - 9, 11+(12-13)*14/ -15")
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Après un clic bouton (pavé / C / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", InsertKind::CloseParen);

            for op in Operator::ALL {
                self.bouton_insert(ui, &op.to_string(), InsertKind::Op);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", ""]] {
                    for touche in ligne {
                        if touche.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, touche, InsertKind::Digit);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /// Retire le dernier symbole (et les espaces qui l’entourent).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        if self.resultat.is_empty() {
            ui.monospace("—");
        } else {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Entrée nettoyée", "demarche_nettoyee", &self.demarche.nettoyee);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if resp.clicked() {
            self.inserer(texte, kind);
        }
    }

    /// Insère un symbole dans l’entrée avec un espacement lisible.
    fn inserer(&mut self, texte: &str, kind: InsertKind) {
        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(texte);
            }
            InsertKind::OpenParen => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if let Some(c) = last {
                    if c.is_ascii_digit() || c == ')' {
                        self.entree.push(' ');
                    }
                }
                self.entree.push_str(texte);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(texte);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto ("- 5" reste un moins binaire ou unaire
                // selon ce qui précède, les blancs sont retirés par le noyau)
                self.entree.push_str(texte);
            }
        }

        self.focus_entree = true;
    }

    /* ------------------------ Appels noyau ------------------------ */

    /// Lit les deux opérandes (validation de frontière), puis calculate_results.
    pub(crate) fn calcul_binaire(&mut self) {
        let lu = lire_operande("premier nombre", &self.premier)
            .and_then(|a| lire_operande("second nombre", &self.second).map(|b| (a, b)));

        let (a, b) = match lu {
            Ok(v) => v,
            Err(msg) => {
                self.set_erreur_binaire(msg);
                return;
            }
        };

        match calculate_results(a, self.operateur, b) {
            Ok(v) => {
                debug!(a, operateur = %self.operateur, b, v, "opération binaire");
                self.set_resultat_binaire(format_result(v));
            }
            Err(e) => self.set_erreur_binaire(e.to_string()),
        }
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    pub(crate) fn eval_via_noyau(&mut self) {
        if self.entree.trim().is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match eval_expression(&self.entree) {
            Ok((v, d_noyau)) => {
                let d_ui = Demarche {
                    nettoyee: d_noyau.nettoyee,
                    jetons: d_noyau.jetons,
                    rpn: d_noyau.rpn,
                };
                self.set_resultats(format_result(v), d_ui);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

/// Opérande saisi à la main : réel fini, sinon message pour l’UI.
fn lire_operande(nom: &str, texte: &str) -> Result<f64, String> {
    let t = texte.trim();
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("{nom} invalide: '{t}'")),
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
