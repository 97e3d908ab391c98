// src/app.rs
//
// Exercices Q-pur — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs, fichiers.rs, vue.rs)
// - Porter l’erreur de la couche fichiers (ErreurApp)
// - Exécuter le mode choisi : générer un lot OU corriger deux fichiers
//
// Le noyau ne voit jamais un fichier : il reçoit et rend du texte.

pub mod etat;
pub mod fichiers;
pub mod vue;

use std::io;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use exercices_qpur::noyau::{corriger, generer_lot, ErreurNoyau, Generateur};

use etat::{Config, Mode};
use fichiers::{FICHIER_EXERCICES, FICHIER_NOTES, FICHIER_REPONSES};

#[derive(Error, Debug)]
pub enum ErreurApp {
    #[error("{}: {source}", chemin.display())]
    Io {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Noyau(#[from] ErreurNoyau),

    #[error("{}:{ligne}: ligne non numérotée : {contenu:?}", chemin.display())]
    LigneMalformee {
        chemin: PathBuf,
        ligne: usize,
        contenu: String,
    },

    #[error("{0}")]
    Config(String),
}

pub fn executer(cfg: &Config) -> Result<(), ErreurApp> {
    match &cfg.mode {
        Mode::Generation { nombre, plage } => generer(cfg, *nombre, *plage),
        Mode::Correction {
            exercices,
            reponses,
        } => corriger_fichiers(cfg, exercices, reponses),
    }
}

/* ------------------------ Générer ------------------------ */

fn generer(cfg: &Config, nombre: usize, plage: i64) -> Result<(), ErreurApp> {
    let rng = match cfg.graine {
        Some(graine) => StdRng::seed_from_u64(graine),
        None => StdRng::from_entropy(),
    };
    journal!(cfg.verbose, "tirage de {nombre} exercices, plage {plage}, graine {:?}", cfg.graine);

    let mut g = Generateur::nouveau(rng, plage)?;
    let lot = generer_lot(&mut g, nombre)?;

    let ex = fichiers::ecrire(&cfg.dossier, FICHIER_EXERCICES, &vue::fichier_exercices(&lot))?;
    let rep = fichiers::ecrire(&cfg.dossier, FICHIER_REPONSES, &vue::fichier_reponses(&lot))?;

    println!(
        "{} exercices écrits dans {} (réponses : {})",
        lot.len(),
        ex.display(),
        rep.display()
    );
    Ok(())
}

/* ------------------------ Corriger ------------------------ */

fn corriger_fichiers(cfg: &Config, exercices: &Path, reponses: &Path) -> Result<(), ErreurApp> {
    let ex = fichiers::lire_lignes_numerotees(exercices)?;
    let rep = fichiers::lire_lignes_numerotees(reponses)?;
    journal!(
        cfg.verbose,
        "{} exercices, {} réponses lus",
        ex.len(),
        rep.len()
    );

    let bilan = corriger(&ex, &rep);
    for (num, d) in &bilan.demarches {
        journal!(cfg.verbose, "{num}. rpn [{}] arbre {}", d.rpn, d.arbre);
    }
    for (num, e) in &bilan.echecs {
        journal!(cfg.verbose, "exercice {num} non évaluable : {e}");
    }

    let rapport = vue::rapport(&bilan);
    let chemin = fichiers::ecrire(&cfg.dossier, FICHIER_NOTES, &rapport)?;

    print!("{rapport}");
    journal!(cfg.verbose, "notes écrites dans {}", chemin.display());
    Ok(())
}
