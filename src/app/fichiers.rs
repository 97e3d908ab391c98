// src/app/fichiers.rs
//
// Fichiers texte numérotés : une ligne "<n>. <texte>" par exercice / réponse.
// Lecture tolérante aux lignes vides et au BOM, stricte sur le préfixe.

use std::fs;
use std::path::{Path, PathBuf};

use super::ErreurApp;

pub const FICHIER_EXERCICES: &str = "Exercises.txt";
pub const FICHIER_REPONSES: &str = "Answers.txt";
pub const FICHIER_NOTES: &str = "Grade.txt";

/// "12. (1 + 2) = " -> (12, "(1 + 2) = ")
pub fn decouper_ligne(ligne: &str) -> Option<(usize, &str)> {
    let (num, reste) = ligne.split_once('.')?;
    let num: usize = num.trim().parse().ok()?;
    if num == 0 {
        return None;
    }
    Some((num, reste.strip_prefix(' ').unwrap_or(reste)))
}

pub fn lire_lignes_numerotees(chemin: &Path) -> Result<Vec<(usize, String)>, ErreurApp> {
    let contenu = fs::read_to_string(chemin).map_err(|source| ErreurApp::Io {
        chemin: chemin.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for (i, ligne) in contenu
        .trim_start_matches('\u{feff}')
        .lines()
        .enumerate()
    {
        if ligne.trim().is_empty() {
            continue;
        }
        let (num, texte) = decouper_ligne(ligne).ok_or_else(|| ErreurApp::LigneMalformee {
            chemin: chemin.to_path_buf(),
            ligne: i + 1,
            contenu: ligne.to_string(),
        })?;
        out.push((num, texte.to_string()));
    }
    Ok(out)
}

/// Écrit `contenu` dans `dossier/nom` (crée le dossier au besoin).
pub fn ecrire(dossier: &Path, nom: &str, contenu: &str) -> Result<PathBuf, ErreurApp> {
    let io = |chemin: &Path| {
        let chemin = chemin.to_path_buf();
        move |source: std::io::Error| ErreurApp::Io { chemin, source }
    };

    fs::create_dir_all(dossier).map_err(io(dossier))?;
    let chemin = dossier.join(nom);
    fs::write(&chemin, contenu).map_err(io(&chemin))?;
    Ok(chemin)
}
