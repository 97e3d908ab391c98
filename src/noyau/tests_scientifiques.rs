//! Tests scientifiques (campagne) : scénarios de référence + invariants.
//!
//! But : fixer les formes canoniques et l’aller-retour générateur -> texte -> évaluateur.
//! - graines fixes (StdRng) pour rejouer un échec
//! - budget temps global
//! - plages petites (3, 4) : c’est là que les rejets de division sont les plus fréquents

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::expr::{Expr, Op};
use super::{eval_expression, generer_probleme, ErreurNoyau, Generateur, Rationnel};

fn r(n: i64, d: i64) -> Rationnel {
    Rationnel::nouveau(n, d).unwrap_or_else(|e| panic!("{n}/{d} : {e}"))
}

fn eval_ok(expr: &str) -> String {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn sci_reduction_deux_quarts() {
    assert_eq!(r(2, 4).to_string(), "1/2");
}

#[test]
fn sci_nombre_mixte() {
    assert_eq!(r(7, 2).to_string(), "3'1/2");
}

#[test]
fn sci_somme_fractions() {
    assert_eq!(eval_ok("(1/2 + 1/3)"), "5/6");
}

#[test]
fn sci_groupe_imbrique() {
    assert_eq!(eval_ok("((2 × 3) - 1)"), "5");
}

#[test]
fn sci_lecture_mixte_et_impropre() {
    let a: Rationnel = "1'1/2".parse().unwrap();
    let b: Rationnel = "3/2".parse().unwrap();
    assert_eq!(a, r(3, 2));
    assert_eq!(b, r(3, 2));
}

#[test]
fn sci_division_par_zero_a_la_construction() {
    assert_eq!(Rationnel::nouveau(3, 0), Err(ErreurNoyau::DivisionParZero));
}

/* ------------------------ Invariants du générateur ------------------------ */

#[test]
fn sci_plage_3_divisions_toujours_propres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for graine in 0..40u64 {
        let mut g = Generateur::nouveau(StdRng::seed_from_u64(graine), 3).unwrap();
        for _ in 0..50 {
            budget(t0, max);
            let n = g.generer().unwrap();
            n.expr.pour_chaque_binaire(&mut |op, a, b| {
                if op == Op::Divise {
                    let vb = b.valeur().unwrap();
                    assert!(!vb.est_nul(), "diviseur nul dans {}", n.expr);
                    let q = a.valeur().unwrap().divise(&vb).unwrap();
                    assert!(q < Rationnel::un(), "quotient {q} >= 1 dans {}", n.expr);
                    assert!(q >= Rationnel::zero());
                }
            });
        }
    }
}

#[test]
fn sci_soustractions_jamais_negatives() {
    let mut g = Generateur::nouveau(StdRng::seed_from_u64(0x5EED), 4).unwrap();
    for _ in 0..400 {
        let n = g.generer().unwrap();
        n.expr.pour_chaque_binaire(&mut |op, a, b| {
            if op == Op::Moins {
                let v = Expr::binaire(op, a.clone(), b.clone()).valeur().unwrap();
                assert!(v.numer() >= 0, "({a} - {b}) = {v}");
            }
        });
    }
}

#[test]
fn sci_aller_retour_texte_valeur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for plage in [2, 3, 5, 10, 50] {
        let mut g = Generateur::nouveau(StdRng::seed_from_u64(plage as u64), plage).unwrap();
        for _ in 0..200 {
            budget(t0, max);
            let n = g.generer().unwrap();
            assert_eq!(eval_ok(&n.texte()), n.valeur.to_string(), "texte={}", n.texte());
        }
    }
}

#[test]
fn sci_probleme_systeme() {
    // aléa du système : on ne vérifie que la forme
    let p = generer_probleme(10).unwrap();
    assert!(p.enonce.ends_with(" = "));
    assert_eq!(eval_ok(p.cle()), p.reponse);
}

#[test]
fn sci_probleme_plage_invalide() {
    assert_eq!(generer_probleme(1), Err(ErreurNoyau::PlageInvalide(1)));
}
