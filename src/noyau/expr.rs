// src/noyau/expr.rs
//
// AST exact (sans flottants), réduit aux quatre opérations.
// - Nombre : feuille rationnelle
// - Binaire : un opérateur, deux sous-arbres
//
// Rendu textuel : entièrement parenthésé, une paire par opérateur,
// un espace de chaque côté du symbole. Aucune précédence à deviner.

use std::fmt;

use super::erreur::Resultat;
use super::rationnel::Rationnel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    pub const TOUS: [Op; 4] = [Op::Plus, Op::Moins, Op::Fois, Op::Divise];

    /// Repli du générateur quand la division est refusée trop souvent.
    pub const SANS_DIVISION: [Op; 3] = [Op::Plus, Op::Moins, Op::Fois];

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '×',
            Op::Divise => '÷',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '×' => Some(Op::Fois),
            '÷' => Some(Op::Divise),
            _ => None,
        }
    }

    /// Application brute (a op b), sans contrainte de domaine.
    pub fn applique(self, a: &Rationnel, b: &Rationnel) -> Resultat<Rationnel> {
        match self {
            Op::Plus => a.ajoute(b),
            Op::Moins => a.soustrait(b),
            Op::Fois => a.multiplie(b),
            Op::Divise => a.divise(b),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Nombre(Rationnel),
    Binaire(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn binaire(op: Op, a: Expr, b: Expr) -> Expr {
        Expr::Binaire(op, Box::new(a), Box::new(b))
    }

    /// Valeur exacte, gauche puis droite, feuilles d’abord.
    pub fn valeur(&self) -> Resultat<Rationnel> {
        match self {
            Expr::Nombre(r) => Ok(*r),
            Expr::Binaire(op, a, b) => op.applique(&a.valeur()?, &b.valeur()?),
        }
    }

    pub fn nb_operateurs(&self) -> usize {
        match self {
            Expr::Nombre(_) => 0,
            Expr::Binaire(_, a, b) => 1 + a.nb_operateurs() + b.nb_operateurs(),
        }
    }

    /// Visite préfixe de tous les noeuds binaires (utile aux tests d’invariants).
    pub fn pour_chaque_binaire<'a>(&'a self, f: &mut impl FnMut(Op, &'a Expr, &'a Expr)) {
        if let Expr::Binaire(op, a, b) = self {
            f(*op, a.as_ref(), b.as_ref());
            a.pour_chaque_binaire(f);
            b.pour_chaque_binaire(f);
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Nombre(r) => write!(f, "{r}"),
            Expr::Binaire(op, a, b) => write!(f, "({a} {} {b})", op.symbole()),
        }
    }
}
