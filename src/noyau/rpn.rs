// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Les quatre opérateurs ont la MÊME précédence et sont associatifs à gauche :
//   une chaîne plate "a op b op c" se replie strictement de gauche à droite,
//   et les groupes parenthésés les plus internes sont réduits d’abord.
// - La grammaire est vérifiée au passage (alternance opérande / opérateur),
//   pour refuser "1(+2)", "()", "1 +" etc. au lieu de les deviner.

use super::erreur::{ErreurNoyau, Resultat};
use super::expr::Expr;
use super::jetons::Tok;

fn malformee(msg: &str) -> ErreurNoyau {
    ErreurNoyau::ExpressionMalformee(msg.to_string())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LPar, Num(2), Op(×), Num(3), RPar, Op(-), Num(1)]
///   rpn:    [Num(2), Num(3), Op(×), Num(1), Op(-)]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou un groupe fermé.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(malformee("nombre inattendu après une valeur"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(malformee("'(' inattendue après une valeur"));
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(malformee("opérande manquant avant ')'"));
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(malformee("')' sans '(' correspondante"));
                }

                prev_was_value = true;
            }

            Tok::Op(_) => {
                if !prev_was_value {
                    return Err(malformee("opérateur sans opérande gauche"));
                }

                // précédence unique, associativité gauche : tout opérateur déjà
                // empilé dans le groupe courant sort avant le nouveau
                while let Some(Tok::Op(_)) = ops.last() {
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err(malformee(if tokens.is_empty() {
            "expression vide"
        } else {
            "opérande manquant en fin d’expression"
        }));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(malformee("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Resultat<Expr> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => st.push(Expr::Nombre(r)),

            Tok::Op(op) => {
                let b = st.pop().ok_or_else(|| malformee("opérande manquant"))?;
                let a = st.pop().ok_or_else(|| malformee("opérande manquant"))?;
                st.push(Expr::binaire(op, a, b));
            }

            Tok::LPar | Tok::RPar => return Err(malformee("parenthèse inattendue en RPN")),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(malformee("expression invalide")),
    }
}
