// src/main.rs
//
// Calculatrice infixe — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------
// But:
// - NATIF : console clap (binary / general) ou fenêtre egui (gui)
// - WEB   : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use clap::Parser;
    use tracing::error;

    use calculatrice_infixe::app::lancer_natif;
    use calculatrice_infixe::console::{executer, Arguments};
    use calculatrice_infixe::journal::init_journal;

    let args = Arguments::parse();
    init_journal(args.verbose);

    match executer(&args.commande) {
        Some(Ok(ligne)) => {
            println!("{ligne}");
            ExitCode::SUCCESS
        }
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
        None => match lancer_natif() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(%e, "échec de l’interface graphique");
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use calculatrice_infixe::app::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
