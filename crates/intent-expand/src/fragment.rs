//! Modelo de fragmentos del árbol de plantillas.
//!
//! Un `Fragment` es un nodo del árbol que produce el parser:
//! - `Word`: exactamente un token literal.
//! - `Sentence`: concatenación ordenada; expande al producto cartesiano de
//!   las expansiones de sus hijos.
//! - `Options`: alternancia; expande a la unión (concatenación de listas)
//!   de las expansiones de sus hijos.
//!
//! El tipo es cerrado a propósito: `expand` se despacha por `match`
//! exhaustivo, de modo que añadir una variante obliga a decidir su
//! semántica de expansión en compilación.

use serde::{Deserialize, Serialize};

/// Nodo del árbol de plantillas parseado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    /// Token literal.
    Word(String),
    /// Concatenación ordenada de sub-fragmentos.
    Sentence(Vec<Fragment>),
    /// Alternativas; el orden de los hijos define el orden de salida.
    Options(Vec<Fragment>),
}

impl Fragment {
    /// Expande el fragmento a todas las secuencias concretas que representa.
    ///
    /// El resultado es determinista: mismo árbol, mismo orden de salida.
    /// No se deduplican expansiones idénticas provenientes de alternativas
    /// distintas. Una `Sentence` multiplica los tamaños de sus hijos, así
    /// que el coste puede crecer de forma combinatoria; ese coste es del
    /// llamador, no se acota aquí.
    pub fn expand(&self) -> Vec<Vec<String>> {
        match self {
            Fragment::Word(word) => vec![vec![word.clone()]],
            Fragment::Sentence(children) => {
                // Fold izquierda-a-derecha: cada hijo multiplica los
                // prefijos acumulados, en orden prefijo-luego-alternativa.
                let mut expanded: Vec<Vec<String>> = vec![Vec::new()];
                for child in children {
                    let sub = child.expand();
                    let mut next = Vec::with_capacity(expanded.len() * sub.len());
                    for prefix in &expanded {
                        for tail in &sub {
                            let mut sentence = prefix.clone();
                            sentence.extend(tail.iter().cloned());
                            next.push(sentence);
                        }
                    }
                    expanded = next;
                }
                expanded
            }
            Fragment::Options(children) => children.iter().flat_map(Fragment::expand).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Fragment;

    fn word(w: &str) -> Fragment {
        Fragment::Word(w.to_string())
    }

    #[test]
    fn word_expands_to_itself() {
        assert_eq!(word("hola").expand(), vec![vec!["hola".to_string()]]);
    }

    #[test]
    fn empty_sentence_expands_to_one_empty_sequence() {
        assert_eq!(Fragment::Sentence(vec![]).expand(), vec![Vec::<String>::new()]);
    }

    #[test]
    fn sentence_is_cross_product_in_prefix_order() {
        let tree = Fragment::Sentence(vec![
            Fragment::Options(vec![word("a"), word("b")]),
            Fragment::Options(vec![word("c"), word("d")]),
        ]);
        let expanded: Vec<Vec<String>> = tree.expand();
        let expected: Vec<Vec<String>> = [["a", "c"], ["a", "d"], ["b", "c"], ["b", "d"]]
            .iter()
            .map(|s| s.iter().map(|w| w.to_string()).collect())
            .collect();
        assert_eq!(expanded, expected);
    }

    #[test]
    fn options_concatenate_without_dedup() {
        let tree = Fragment::Options(vec![word("x"), word("x")]);
        assert_eq!(tree.expand(), vec![vec!["x".to_string()], vec!["x".to_string()]]);
    }
}
