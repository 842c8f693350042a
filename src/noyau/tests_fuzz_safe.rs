//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur / profondeur bornées
//! - budget temps global
//! - invariant clé : nombre de '(' != nombre de ')' => jamais de résultat

use std::time::{Duration, Instant};

use super::erreur::EvaluationError;
use super::solve_simplification;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Bruit : alphabet complet + blancs + quelques intrus.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '7', '9', '.', '+', '-', '*', '/', '(', ')', ' ', ' ', '\t', 'x', '^',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn gen_atom(rng: &mut Rng) -> String {
    let n = rng.pick(10);
    if rng.coin() {
        format!("{n}")
    } else if rng.coin() {
        format!("{n}.{}", rng.pick(100))
    } else {
        format!("-{n}")
    }
}

/// Expression bien formée (parenthèses complètes autour de chaque binaire).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_atom(rng);
    }

    let op = ['+', '-', '*', '/'][rng.pick(4) as usize];
    format!(
        "({} {op} {})",
        gen_expr(rng, depth - 1),
        gen_expr(rng, depth - 1)
    )
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bruit_determinisme_et_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let expr = gen_bruit(&mut rng, len);

        let r1 = solve_simplification(&expr);
        let r2 = solve_simplification(&expr);
        assert_eq!(r1, r2, "non déterministe: expr={expr:?}");

        let ouvrantes = expr.chars().filter(|&c| c == '(').count();
        let fermantes = expr.chars().filter(|&c| c == ')').count();
        if ouvrantes != fermantes {
            assert!(r1.is_err(), "parenthèses déséquilibrées acceptées: {expr:?}");
        }

        if expr.contains(['x', '^']) {
            assert!(
                matches!(r1, Err(EvaluationError::UnsupportedCharacter(_))),
                "intrus non rejeté: expr={expr:?} r={r1:?}"
            );
        }

        match r1 {
            Ok(_) => seen_ok += 1,
            Err(EvaluationError::InvalidOperator(_)) => {
                panic!("InvalidOperator hors chemin binaire: expr={expr:?}")
            }
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match solve_simplification(&expr) {
            Ok(_) => seen_ok += 1,
            // Seule erreur possible sur une expression bien formée.
            Err(EvaluationError::DivisionByZero) => {}
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = somme_balancee("1", 800);
    let v = solve_simplification(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 800.0);
}

#[test]
fn fuzz_safe_longue_chaine_lineaire() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // Pas de récursion dans le noyau : une chaîne très longue passe.
    let expr = vec!["2"; 20_000].join("-");
    let v = solve_simplification(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 2.0 - 2.0 * 19_999.0);
}
