// src/main.rs
//
// Exercices Q-pur — point d’entrée ligne de commande
// --------------------------------------------------
// But:
// - Générer : exercices_qpur -r 10 [-n 100]      => Exercises.txt + Answers.txt
// - Corriger : exercices_qpur -e Exercises.txt -a Answers.txt => Grade.txt
//
// IMPORTANT (structure projet):
// - Le noyau exact vit dans la bibliothèque (src/lib.rs -> noyau/)
// - Ici: lecture des options, exécution, code de sortie

use std::process::ExitCode;

use clap::Parser;

/// Journal horodaté sur stderr, actif seulement avec --verbose.
macro_rules! journal {
    ($verbose:expr, $($arg:tt)*) => {
        if $verbose {
            eprintln!(
                "[{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                format_args!($($arg)*)
            );
        }
    };
}

mod app;

use app::etat::{Args, Config};

fn main() -> ExitCode {
    let args = Args::parse();

    let resultat = Config::depuis_args(args).and_then(|cfg| app::executer(&cfg));

    match resultat {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("erreur : {e}");
            ExitCode::FAILURE
        }
    }
}
