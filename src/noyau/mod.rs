//! Noyau exact Q-pur (exercices)
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie d’erreurs du noyau
//! - rationnel.rs  : rationnel exact + forme canonique (entier, n/d, e'n/d)
//! - expr.rs       : AST exact + rendu entièrement parenthésé
//! - generateur.rs : tirage d’arbres sous contraintes (pas de négatif, divisions propres)
//! - lot.rs        : lot de problèmes distincts
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + construction Expr
//! - eval.rs       : pipeline complet texte -> valeur
//! - correction.rs : re-calcul + comparaison des réponses

pub mod correction;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod generateur;
pub mod jetons;
pub mod lot;
pub mod rationnel;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use correction::{corriger, Bilan};
pub use erreur::ErreurNoyau;
pub use eval::{eval_expression, evaluer};
pub use generateur::{generer_probleme, Generateur, Probleme};
pub use lot::generer_lot;
pub use rationnel::Rationnel;
