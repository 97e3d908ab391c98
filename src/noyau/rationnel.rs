// src/noyau/rationnel.rs
//
// Rationnel exact sur i64 (num-rational).
// Invariants : fraction irréductible, dénominateur > 0, signe porté par le numérateur.
// i64::MIN est refusé partout (sa valeur absolue n’existe pas en i64).
//
// Forme canonique (affichage ET lecture) :
// - entier          : "7", "-2"
// - fraction propre : "3/4", "-1/2"
// - nombre mixte    : "3'1/2"  (|n| > d ; signe sur la partie entière seulement)

use std::fmt;
use std::str::FromStr;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};

use super::erreur::{ErreurNoyau, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rationnel(Rational64);

impl Rationnel {
    /// n/d réduit. Échoue si d == 0.
    pub fn nouveau(numer: i64, denom: i64) -> Resultat<Self> {
        if denom == 0 {
            return Err(ErreurNoyau::DivisionParZero);
        }
        if numer == i64::MIN || denom == i64::MIN {
            return Err(ErreurNoyau::Depassement);
        }
        // Ratio::new réduit par le pgcd et remet le signe au numérateur.
        Ok(Self(Rational64::new(numer, denom)))
    }

    pub fn entier(n: i64) -> Resultat<Self> {
        Self::nouveau(n, 1)
    }

    pub fn zero() -> Self {
        Self(Rational64::zero())
    }

    pub fn un() -> Self {
        Self(Rational64::one())
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn est_nul(&self) -> bool {
        self.0.is_zero()
    }

    /* ------------------------ Arithmétique (vérifiée) ------------------------ */

    pub fn ajoute(&self, autre: &Self) -> Resultat<Self> {
        borne(self.0.checked_add(&autre.0))
    }

    pub fn soustrait(&self, autre: &Self) -> Resultat<Self> {
        borne(self.0.checked_sub(&autre.0))
    }

    pub fn multiplie(&self, autre: &Self) -> Resultat<Self> {
        borne(self.0.checked_mul(&autre.0))
    }

    pub fn divise(&self, autre: &Self) -> Resultat<Self> {
        if autre.est_nul() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        borne(self.0.checked_div(&autre.0))
    }

    fn oppose(&self) -> Self {
        // numérateur jamais i64::MIN => négation sûre
        Self(-self.0)
    }
}

/// Résultat d’une opération vérifiée -> Rationnel (ou Depassement).
fn borne(r: Option<Rational64>) -> Resultat<Rationnel> {
    match r {
        Some(v) if *v.numer() != i64::MIN && *v.denom() != i64::MIN => Ok(Rationnel(v)),
        _ => Err(ErreurNoyau::Depassement),
    }
}

/* ------------------------ Affichage canonique ------------------------ */

impl fmt::Display for Rationnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.numer();
        let d = self.denom();

        if d == 1 {
            write!(f, "{n}")
        } else if n.abs() > d {
            // division entière tronquée : le signe reste sur la partie entière
            write!(f, "{}'{}/{}", n / d, (n % d).abs(), d)
        } else {
            write!(f, "{n}/{d}")
        }
    }
}

/* ------------------------ Lecture (inverse de l’affichage) ------------------------ */

impl FromStr for Rationnel {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Resultat<Self> {
        // Nombre mixte : e'n/d
        if let Some((partie_entiere, reste)) = s.split_once('\'') {
            let (n, d) = reste
                .split_once('/')
                .ok_or_else(|| ErreurNoyau::NombreMalforme(s.to_string()))?;

            let e = lire_entier(partie_entiere, true, s)?;
            let n = lire_entier(n, false, s)?;
            let d = lire_entier(d, false, s)?;

            let abs = Self::entier(e.abs())?.ajoute(&Self::nouveau(n, d)?)?;

            // "-1'1/2" vaut -(1 + 1/2) : le signe s’applique au tout
            return Ok(if partie_entiere.starts_with('-') {
                abs.oppose()
            } else {
                abs
            });
        }

        // Fraction : n/d
        if let Some((n, d)) = s.split_once('/') {
            let n = lire_entier(n, true, s)?;
            let d = lire_entier(d, false, s)?;
            return Self::nouveau(n, d);
        }

        // Entier
        Self::entier(lire_entier(s, true, s)?)
    }
}

/// Entier décimal strict : '-'? [0-9]+ (pas de '+', pas d’espaces).
fn lire_entier(morceau: &str, signe_permis: bool, texte: &str) -> Resultat<i64> {
    let chiffres = match morceau.strip_prefix('-') {
        Some(reste) if signe_permis => reste,
        _ => morceau,
    };

    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErreurNoyau::NombreMalforme(texte.to_string()));
    }

    // chiffres valides : seul un dépassement peut encore échouer
    let v: i64 = morceau.parse().map_err(|_| ErreurNoyau::Depassement)?;
    if v == i64::MIN {
        return Err(ErreurNoyau::Depassement);
    }
    Ok(v)
}
