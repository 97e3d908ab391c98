// src/noyau/lot.rs
//
// Lot d’exercices distincts.
// Deux problèmes sont identiques si leurs énoncés (sans " = ") sont identiques.
// Le nombre de tirages est borné : une plage trop petite ne peut pas
// fournir n énoncés différents, on le signale au lieu de boucler.

use std::collections::HashSet;

use rand::Rng;

use super::erreur::{ErreurNoyau, Resultat};
use super::generateur::{Generateur, Probleme};

/// Tirages permis par problème demandé.
const ESSAIS_PAR_PROBLEME: usize = 100;

pub fn generer_lot<R: Rng>(g: &mut Generateur<R>, n: usize) -> Resultat<Vec<Probleme>> {
    let mut vus: HashSet<String> = HashSet::with_capacity(n);
    let mut lot: Vec<Probleme> = Vec::with_capacity(n);

    let max_tirages = n.saturating_mul(ESSAIS_PAR_PROBLEME);
    let mut tirages = 0usize;

    while lot.len() < n && tirages < max_tirages {
        tirages += 1;
        let p = g.probleme()?;
        if vus.insert(p.cle().to_string()) {
            lot.push(p);
        }
    }

    if lot.len() < n {
        return Err(ErreurNoyau::LotIncomplet {
            demandes: n,
            obtenus: lot.len(),
        });
    }
    Ok(lot)
}
