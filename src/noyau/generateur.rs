// src/noyau/generateur.rs
//
// Générateur d’exercices : arbre aléatoire, entièrement parenthésé.
//
// Règles de domaine (vérifiées au moment où le noeud est construit) :
// - '-' : l’opérande de plus grande valeur passe à gauche => jamais de résultat négatif
// - '÷' : refusé si le diviseur vaut 0 ou si le quotient n’est pas < 1
//         (toute division donne une fraction propre)
// - dépassement i64 pendant un tirage : tirage refusé, comme une division invalide
//
// Un tirage refusé est retenté au même niveau, au plus ESSAIS_MAX fois ;
// ensuite on retire le noeud sans '÷' (repli explicite, jamais de boucle infinie).

use rand::Rng;

use super::erreur::{ErreurNoyau, Resultat};
use super::expr::{Expr, Op};
use super::rationnel::Rationnel;

/// Nombre maximal d’opérateurs par exercice.
pub const MAX_OPERATEURS: usize = 3;

/// Probabilité d’arrêter la descente avant d’avoir épuisé les opérateurs.
const PROBA_FEUILLE: f64 = 0.3;

/// Tirages complets retentés avant le repli sans division.
const ESSAIS_MAX: usize = 64;

/// Sous-arbre généré + sa valeur exacte (calculée en même temps que le texte).
#[derive(Clone, Debug)]
pub struct Noeud {
    pub expr: Expr,
    pub valeur: Rationnel,
}

impl Noeud {
    fn feuille(valeur: Rationnel) -> Self {
        Self {
            expr: Expr::Nombre(valeur),
            valeur,
        }
    }

    pub fn texte(&self) -> String {
        self.expr.to_string()
    }
}

/// Une ligne d’exercice et la réponse attendue, prêtes à numéroter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probleme {
    /// "(1/2 + 3) = "
    pub enonce: String,
    /// "3'1/2"
    pub reponse: String,
}

impl Probleme {
    /// Clé de dédoublonnage : l’énoncé sans le " = " final.
    pub fn cle(&self) -> &str {
        self.enonce.trim_end().trim_end_matches('=').trim_end()
    }
}

impl From<Noeud> for Probleme {
    fn from(n: Noeud) -> Self {
        Self {
            enonce: format!("{} = ", n.expr),
            reponse: n.valeur.to_string(),
        }
    }
}

pub struct Generateur<R: Rng> {
    rng: R,
    plage: i64,
    max_operateurs: usize,
    essais_max: usize,
}

impl<R: Rng> Generateur<R> {
    /// `plage` borne les feuilles : entiers dans [1, plage-1], fractions n/d avec d <= plage.
    pub fn nouveau(rng: R, plage: i64) -> Resultat<Self> {
        if plage < 2 {
            return Err(ErreurNoyau::PlageInvalide(plage));
        }
        Ok(Self {
            rng,
            plage,
            max_operateurs: MAX_OPERATEURS,
            essais_max: ESSAIS_MAX,
        })
    }

    pub fn avec_max_operateurs(mut self, max_operateurs: usize) -> Self {
        self.max_operateurs = max_operateurs;
        self
    }

    pub fn avec_essais_max(mut self, essais_max: usize) -> Self {
        self.essais_max = essais_max;
        self
    }

    /// Un arbre complet (au plus `max_operateurs` opérateurs).
    pub fn generer(&mut self) -> Resultat<Noeud> {
        self.noeud(self.max_operateurs)
    }

    pub fn probleme(&mut self) -> Resultat<Probleme> {
        self.generer().map(Probleme::from)
    }

    /* ------------------------ Descente récursive ------------------------ */

    fn noeud(&mut self, ops_restants: usize) -> Resultat<Noeud> {
        for _ in 0..self.essais_max {
            if let Some(n) = self.tirage(ops_restants, &Op::TOUS)? {
                return Ok(n);
            }
        }

        // Repli : '+', '-', '×' ne sont refusés que sur dépassement.
        self.tirage(ops_restants, &Op::SANS_DIVISION)?
            .ok_or(ErreurNoyau::Depassement)
    }

    /// None = tirage refusé (à retenter au même niveau).
    fn tirage(&mut self, ops_restants: usize, ops: &[Op]) -> Resultat<Option<Noeud>> {
        if ops_restants == 0 || self.rng.gen_bool(PROBA_FEUILLE) {
            return self.feuille().map(Some);
        }

        // un opérateur ici, le reste partagé entre les deux côtés
        let budget_gauche = self.rng.gen_range(0..ops_restants);
        let gauche = self.noeud(budget_gauche)?;
        let droite = self.noeud(ops_restants - 1 - budget_gauche)?;
        let op = ops[self.rng.gen_range(0..ops.len())];

        Ok(combine(op, gauche, droite))
    }

    fn feuille(&mut self) -> Resultat<Noeud> {
        let valeur = if self.rng.gen_bool(0.5) {
            Rationnel::entier(self.rng.gen_range(1..self.plage))?
        } else {
            // n < d <= plage : fraction propre, jamais entière
            let n = self.rng.gen_range(1..self.plage);
            let d = self.rng.gen_range(n + 1..=self.plage);
            Rationnel::nouveau(n, d)?
        };
        Ok(Noeud::feuille(valeur))
    }
}

/// API publique : un problème avec l’aléa du système.
pub fn generer_probleme(plage: i64) -> Resultat<Probleme> {
    Generateur::nouveau(rand::thread_rng(), plage)?.probleme()
}

/// Construit (gauche op droite) si le domaine l’autorise.
fn combine(op: Op, gauche: Noeud, droite: Noeud) -> Option<Noeud> {
    let (gauche, droite) = match op {
        // ordre du texte = ordre des valeurs
        Op::Moins if gauche.valeur < droite.valeur => (droite, gauche),
        Op::Divise if droite.valeur.est_nul() => return None,
        _ => (gauche, droite),
    };

    let valeur = op.applique(&gauche.valeur, &droite.valeur).ok()?;

    if op == Op::Divise && valeur >= Rationnel::un() {
        return None;
    }

    Some(Noeud {
        expr: Expr::binaire(op, gauche.expr, droite.expr),
        valeur,
    })
}
