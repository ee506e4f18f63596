//! Tokenizador de líneas de entrenamiento.
//!
//! Separa por espacios y emite los átomos reservados de la gramática como
//! tokens propios aunque vengan pegados a una palabra, de modo que
//! `"(hola|adios) mundo"` alimenta directamente al parser.

use crate::constants::{ALT_SEP, GROUP_CLOSE, GROUP_OPEN};

fn is_reserved(ch: char) -> bool {
    let s = ch.to_string();
    s == GROUP_OPEN || s == ALT_SEP || s == GROUP_CLOSE
}

/// Convierte una línea cruda en la lista de tokens que consume el parser.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in line.split_whitespace() {
        let mut word = String::new();
        for ch in chunk.chars() {
            if is_reserved(ch) {
                if !word.is_empty() {
                    tokens.push(std::mem::take(&mut word));
                }
                tokens.push(ch.to_string());
            } else {
                word.push(ch);
            }
        }
        if !word.is_empty() {
            tokens.push(word);
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("hola  mundo"), vec!["hola", "mundo"]);
    }

    #[test]
    fn reserved_atoms_become_standalone_tokens() {
        assert_eq!(
            tokenize("(hola|adios) mundo"),
            vec!["(", "hola", "|", "adios", ")", "mundo"]
        );
    }

    #[test]
    fn blank_line_yields_no_tokens() {
        assert!(tokenize("   ").is_empty());
    }
}
