// src/noyau/jetons.rs

use super::erreur::{ErreurNoyau, Resultat};
use super::expr::Op;
use super::rationnel::Rationnel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(Rationnel),
    Op(Op),
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres sous forme canonique : 12, 3/4, 2'1/3 (lus par Rationnel::from_str)
/// - opérateurs + - × ÷
/// - parenthèses ( )
/// - un '-' en position d’opérande (début, après '(' ou après un opérateur)
///   suivi d’un chiffre est le signe du nombre, pas une soustraction
///
/// Les espaces sont ignorés : "1 1/2" se lit donc "11/2".
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let attend_operande = matches!(out.last(), None | Some(Tok::LPar) | Some(Tok::Op(_)));
        let signe = c == '-'
            && attend_operande
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());

        // Nombre : [-]? puis le plus long bloc de [0-9 ' /]
        if c.is_ascii_digit() || signe {
            let start = i;
            i += 1;
            while i < chars.len() && est_car_nombre(chars[i]) {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Tok::Num(texte.parse()?));
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => match Op::depuis_symbole(c) {
                Some(op) => out.push(Tok::Op(op)),
                None => {
                    return Err(ErreurNoyau::ExpressionMalformee(format!(
                        "caractère inattendu: '{c}'"
                    )))
                }
            },
        }
        i += 1;
    }

    Ok(out)
}

fn est_car_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '/' || c == '\''
}

/// Format utilitaire (verbose) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(r) => r.to_string(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
