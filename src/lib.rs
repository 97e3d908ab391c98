//! Exercices Q-pur : exercices d’arithmétique sur des rationnels exacts.
//!
//! - génération d’expressions entièrement parenthésées (valeur + texte canonique)
//! - relecture du texte seul et re-calcul exact, pour corriger des réponses
//!
//! La ligne de commande (src/main.rs) n’est qu’une enveloppe fichiers autour de `noyau`.

pub mod noyau;
