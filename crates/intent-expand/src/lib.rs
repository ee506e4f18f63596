//! intent-expand: expansión de plantillas con grupos y alternativas.
//!
//! Convierte una secuencia de tokens con marcadores `(`, `|`, `)` en todas
//! las secuencias concretas que representa:
//! - `fragment`: el modelo de árbol (Word / Sentence / Options).
//! - `parser`: descenso recursivo token-a-token y el driver
//!   `expand_parentheses`.
//! - `tokenize`: de línea cruda a tokens.
//!
//! `["1", "(", "2", "|", "3", ")"]` -> `[["1", "2"], ["1", "3"]]`

pub mod constants;
pub mod fragment;
pub mod parser;
pub mod tokenize;

pub use fragment::Fragment;
pub use parser::{expand_parentheses, parse};
pub use tokenize::tokenize;

#[cfg(test)]
mod tests {
    use super::{expand_parentheses, tokenize};

    #[test]
    fn tokenize_then_expand_roundtrip() {
        let out = expand_parentheses(&tokenize("enciende la (luz|lampara)"));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], vec!["enciende", "la", "luz"]);
        assert_eq!(out[1], vec!["enciende", "la", "lampara"]);
    }

    #[test]
    fn expansion_is_deterministic() {
        let tokens = tokenize("(a|b) (c|d)");
        assert_eq!(expand_parentheses(&tokens), expand_parentheses(&tokens));
    }
}
