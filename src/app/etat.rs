//! src/app/etat.rs
//!
//! Configuration de la ligne de commande (sans noyau, sans fichiers).
//!
//! Rôle : lire les options (clap), puis les valider en un `Config` fermé
//! qui ne laisse qu’un mode possible : générer OU corriger.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing d’expression).
//! - Défense en profondeur : bornes sur le nombre d’exercices et la plage.

use std::path::PathBuf;

use clap::Parser;

use super::ErreurApp;

/// Nombre d’exercices par défaut (-n absent).
const NB_DEFAUT: usize = 10;

/// Garde-fou : nombre maximal d’exercices par lot.
pub const NB_MAX: usize = 10_000;

/// Garde-fou : au-delà, les dénominateurs d’un arbre à 3 opérateurs
/// approchent la limite i64 pendant les calculs intermédiaires.
pub const PLAGE_MAX: i64 = 1_000;

/// Générateur d’exercices sur les fractions, et correcteur de réponses.
///
/// Générer : `-r <plage> [-n <nombre>]` écrit Exercises.txt et Answers.txt.
/// Corriger : `-e <exercices> -a <réponses>` écrit Grade.txt.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Nombre d’exercices à générer
    #[arg(short = 'n')]
    pub nombre: Option<usize>,
    /// Plage des nombres : entiers dans [1, r-1], dénominateurs <= r
    #[arg(short = 'r')]
    pub plage: Option<i64>,
    /// Fichier d’exercices à corriger
    #[arg(short = 'e')]
    pub exercices: Option<PathBuf>,
    /// Fichier de réponses à corriger
    #[arg(short = 'a')]
    pub reponses: Option<PathBuf>,
    /// Dossier où écrire les fichiers produits
    #[arg(short = 'o', long, default_value = ".")]
    pub dossier: PathBuf,
    /// Graine du tirage (suite reproductible)
    #[arg(long)]
    pub graine: Option<u64>,
    /// Affiche la démarche et les erreurs ligne par ligne
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Generation { nombre: usize, plage: i64 },
    Correction { exercices: PathBuf, reponses: PathBuf },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub dossier: PathBuf,
    pub graine: Option<u64>,
    pub verbose: bool,
}

impl Config {
    pub fn depuis_args(args: Args) -> Result<Self, ErreurApp> {
        let erreur = |msg: &str| Err(ErreurApp::Config(msg.to_string()));

        let mode = match (args.plage, args.exercices, args.reponses) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return erreur("-r (générer) et -e/-a (corriger) sont incompatibles");
            }
            (Some(plage), None, None) => {
                let nombre = args.nombre.unwrap_or(NB_DEFAUT);
                if !(2..=PLAGE_MAX).contains(&plage) {
                    return Err(ErreurApp::Config(format!(
                        "-r doit être dans [2, {PLAGE_MAX}] (reçu {plage})"
                    )));
                }
                if !(1..=NB_MAX).contains(&nombre) {
                    return Err(ErreurApp::Config(format!(
                        "-n doit être dans [1, {NB_MAX}] (reçu {nombre})"
                    )));
                }
                Mode::Generation { nombre, plage }
            }
            (None, Some(exercices), Some(reponses)) => {
                if args.nombre.is_some() {
                    return erreur("-n n’a de sens qu’avec -r");
                }
                Mode::Correction {
                    exercices,
                    reponses,
                }
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                return erreur("-e et -a vont ensemble");
            }
            (None, None, None) => {
                return erreur("rien à faire : -r <plage> pour générer, -e <fichier> -a <fichier> pour corriger");
            }
        };

        Ok(Self {
            mode,
            dossier: args.dossier,
            graine: args.graine,
            verbose: args.verbose,
        })
    }
}
