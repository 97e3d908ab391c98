// src/app/vue.rs
//
// Vue texte : ce qui est écrit dans les fichiers et sur la console.
// Aucune logique de calcul ici, seulement la mise en forme.

use exercices_qpur::noyau::{Bilan, Probleme};

/// "1. a\n2. b\n" (numérotation 1-based, une ligne par élément)
pub fn lignes_numerotees<'a>(textes: impl IntoIterator<Item = &'a str>) -> String {
    textes
        .into_iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {t}\n", i + 1))
        .collect()
}

pub fn fichier_exercices(lot: &[Probleme]) -> String {
    lignes_numerotees(lot.iter().map(|p| p.enonce.as_str()))
}

pub fn fichier_reponses(lot: &[Probleme]) -> String {
    lignes_numerotees(lot.iter().map(|p| p.reponse.as_str()))
}

/// Correct: 2 (1, 3)
/// Wrong: 1 (2)
pub fn rapport(bilan: &Bilan) -> String {
    format!(
        "Correct: {} ({})\nWrong: {} ({})\n",
        bilan.corrects.len(),
        liste(&bilan.corrects),
        bilan.faux.len(),
        liste(&bilan.faux)
    )
}

fn liste(nums: &[usize]) -> String {
    nums.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
