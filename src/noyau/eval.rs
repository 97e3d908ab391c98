//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN -> Expr -> valeur exacte -> forme canonique
//!
//! Le texte est relu sans aucun accès à l’arbre qui l’a produit :
//! c’est ce qui permet de corriger un fichier d’exercices quelconque.

use super::erreur::{ErreurNoyau, Resultat};
use super::jetons::{format_tokens, tokenize};
use super::rationnel::Rationnel;
use super::rpn::{from_rpn, to_rpn};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// Évalue une expression et retourne la valeur exacte + la démarche (jetons, rpn, arbre relu).
pub fn evaluer(expr_str: &str) -> Resultat<(Rationnel, DemarcheNoyau)> {
    // 1) Jetons (espaces ignorés) ; un nombre illisible rend l’expression malformée
    let jetons = tokenize(expr_str).map_err(|e| match e {
        ErreurNoyau::NombreMalforme(n) => {
            ErreurNoyau::ExpressionMalformee(format!("nombre illisible : {n}"))
        }
        autre => autre,
    })?;

    // 2) RPN (précédence unique, gauche à droite)
    let rpn = to_rpn(&jetons)?;

    // 3) AST
    let expr = from_rpn(&rpn)?;

    // 4) Valeur exacte (division par zéro / dépassement remontent tels quels)
    let valeur = expr.valeur()?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        arbre: expr.to_string(),
    };

    Ok((valeur, d))
}

/// API publique : texte d’expression (sans numéro de ligne) -> réponse canonique.
pub fn eval_expression(expr_str: &str) -> Resultat<String> {
    evaluer(expr_str).map(|(v, _)| v.to_string())
}
