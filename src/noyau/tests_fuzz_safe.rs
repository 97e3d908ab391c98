//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, forme invalide, dépassement)
//! - invariant clé : jamais de panique, erreur typée ou réponse canonique relisible

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{eval_expression, ErreurNoyau, Rationnel};

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut StdRng) -> String {
    // inclut 0 (utile pour provoquer des divisions par zéro)
    let n = rng.gen_range(0..8);
    match rng.gen_range(0..3) {
        0 => format!("{n}"),
        1 => format!("{n}/{}", rng.gen_range(1..9)),
        _ => format!("{}'{n}/{}", rng.gen_range(1..5), rng.gen_range(n + 1..12)),
    }
}

fn gen_op(rng: &mut StdRng) -> char {
    ['+', '-', '×', '÷'][rng.gen_range(0..4)]
}

fn gen_expr(rng: &mut StdRng, depth: usize) -> String {
    if depth == 0 || rng.gen_bool(0.25) {
        return gen_nombre(rng);
    }
    match rng.gen_range(0..3) {
        // groupe bien formé
        0 | 1 => format!(
            "({} {} {})",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
        // chaîne plate à plusieurs opérateurs (saisie manuelle)
        _ => format!(
            "({} {} {} {} {})",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
    }
}

/// Abîme une expression : retire ou ajoute une parenthèse, insère un symbole inconnu…
fn abime(rng: &mut StdRng, s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    let i = rng.gen_range(0..=chars.len());
    match rng.gen_range(0..4) {
        0 => chars.insert(i, '('),
        1 => chars.insert(i, ')'),
        2 => chars.insert(i, ['*', '%', 'x', '.', '='][rng.gen_range(0..5)]),
        _ => {
            if let Some(p) = chars.iter().position(|c| *c == ')') {
                chars.remove(p);
            } else {
                chars.insert(i, '+');
            }
        }
    }
    chars.into_iter().collect()
}

fn is_erreur_attendue(e: &ErreurNoyau) -> bool {
    matches!(
        e,
        ErreurNoyau::DivisionParZero
            | ErreurNoyau::Depassement
            | ErreurNoyau::ExpressionMalformee(_)
            | ErreurNoyau::NombreMalforme(_)
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_reponse_canonique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);

        // même texte => même sortie
        let r1 = eval_expression(&expr);
        let r2 = eval_expression(&expr);
        assert_eq!(r1, r2, "non déterministe : {expr:?}");

        match r1 {
            Ok(rep) => {
                // la réponse est une forme canonique relisible
                let v: Rationnel = rep
                    .parse()
                    .unwrap_or_else(|e| panic!("réponse {rep:?} illisible ({e}) pour {expr:?}"));
                assert_eq!(v.to_string(), rep);
                seen_ok += 1;
            }
            Err(e) => {
                assert!(is_erreur_attendue(&e), "erreur non attendue: expr={expr:?} err={e}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_entrees_abimees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = StdRng::seed_from_u64(0xBADC0DE);

    for _ in 0..300 {
        budget(t0, max);

        let base = gen_expr(&mut rng, 2);
        let expr = abime(&mut rng, &base);

        if let Err(e) = eval_expression(&expr) {
            assert!(is_erreur_attendue(&e), "erreur non attendue: expr={expr:?} err={e}");
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 512 × 1/2, entièrement parenthésé, arbre équilibré
    let mut items: Vec<String> = (0..512).map(|_| "1/2".to_string()).collect();
    while items.len() > 1 {
        items = items
            .chunks(2)
            .map(|c| format!("({} + {})", c[0], c[1]))
            .collect();
    }
    let expr = items.pop().unwrap_or_else(|| "0".to_string());
    budget(t0, max);

    assert_eq!(eval_expression(&expr).unwrap(), "256");
}
