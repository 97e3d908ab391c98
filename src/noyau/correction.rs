// src/noyau/correction.rs
//
// Correction : chaque énoncé est RE-CALCULÉ depuis son texte, puis sa forme
// canonique est comparée (texte exact, espaces de bord ignorés) à la réponse
// soumise portant le même numéro.
//
// - réponse absente            => faux
// - énoncé impossible à évaluer => faux, et l’erreur est gardée dans `echecs`
// - énoncé évalué               => sa démarche est gardée dans `demarches`

use std::collections::BTreeMap;

use super::erreur::ErreurNoyau;
use super::eval::{evaluer, DemarcheNoyau};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub corrects: Vec<usize>,
    pub faux: Vec<usize>,
    pub echecs: Vec<(usize, ErreurNoyau)>,
    pub demarches: Vec<(usize, DemarcheNoyau)>,
}

/// Partie expression d’un énoncé : tout ce qui précède '='.
pub fn expression_de_l_enonce(enonce: &str) -> &str {
    enonce.split_once('=').map_or(enonce, |(gauche, _)| gauche).trim()
}

/// `exercices` et `reponses` : (numéro 1-based, texte sans le préfixe "n. ").
pub fn corriger(exercices: &[(usize, String)], reponses: &[(usize, String)]) -> Bilan {
    let reponses: BTreeMap<usize, &str> = reponses
        .iter()
        .map(|(num, texte)| (*num, texte.trim()))
        .collect();

    let mut bilan = Bilan::default();

    for (num, enonce) in exercices {
        let attendue = match evaluer(expression_de_l_enonce(enonce)) {
            Ok((v, d)) => {
                bilan.demarches.push((*num, d));
                v.to_string()
            }
            Err(e) => {
                bilan.echecs.push((*num, e));
                bilan.faux.push(*num);
                continue;
            }
        };

        match reponses.get(num) {
            Some(soumise) if *soumise == attendue => bilan.corrects.push(*num),
            _ => bilan.faux.push(*num),
        }
    }

    bilan.corrects.sort_unstable();
    bilan.faux.sort_unstable();
    bilan
}
