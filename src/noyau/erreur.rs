// src/noyau/erreur.rs
//
// Erreurs du noyau exact.
// Toutes sont levées au point de violation et remontées telles quelles :
// le noyau ne rattrape rien (le rejet de division du générateur est un
// nouveau tirage, pas une reprise d’erreur).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    /// Dénominateur nul à la construction, ou division par une valeur nulle.
    #[error("division par zéro")]
    DivisionParZero,

    /// Le texte ne suit ni la forme entière, ni `n/d`, ni `e'n/d`.
    #[error("nombre invalide : {0:?}")]
    NombreMalforme(String),

    /// Parenthèses déséquilibrées, opérateur inconnu, opérande manquant…
    #[error("expression invalide : {0}")]
    ExpressionMalformee(String),

    /// Un calcul intermédiaire sort de la plage des entiers 64 bits.
    #[error("dépassement de capacité (i64)")]
    Depassement,

    /// Borne de tirage trop petite pour produire une feuille.
    #[error("plage invalide : {0} (minimum 2)")]
    PlageInvalide(i64),

    /// Impossible de réunir assez de problèmes distincts.
    #[error("seulement {obtenus} problèmes distincts sur {demandes} demandés")]
    LotIncomplet { demandes: usize, obtenus: usize },
}

pub type Resultat<T> = Result<T, ErreurNoyau>;
