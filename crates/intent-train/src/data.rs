//! Agregado de datos de entrenamiento.
//!
//! `TrainData` guarda, por nombre de artefacto, las frases ya tokenizadas y
//! expandidas de sus líneas de entrada. El agregado completo se pasa a cada
//! `train`, de modo que un artefacto puede usar las frases de los demás como
//! muestras negativas.

use std::collections::HashMap;

use intent_expand::{expand_parentheses, tokenize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TrainData {
    sent_lists: HashMap<String, Vec<Vec<String>>>,
}

impl TrainData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokeniza y expande `lines` y las asocia a `name`.
    ///
    /// Volver a añadir un nombre reemplaza sus frases anteriores: registrar
    /// dos veces el mismo artefacto no duplica datos.
    pub fn add_lines(&mut self, name: &str, lines: &[String]) {
        let mut sentences = Vec::new();
        for line in lines {
            let tokens = tokenize(line);
            if tokens.is_empty() {
                continue;
            }
            sentences.extend(expand_parentheses(&tokens));
        }
        self.sent_lists.insert(name.to_string(), sentences);
    }

    /// Frases del propio artefacto (muestras positivas).
    pub fn sentences(&self, name: &str) -> impl Iterator<Item = &[String]> {
        self.sent_lists
            .get(name)
            .into_iter()
            .flat_map(|sents| sents.iter().map(Vec::as_slice))
    }

    /// Frases de todos los demás artefactos (muestras negativas).
    pub fn other_sentences<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a [String]> {
        self.sent_lists
            .iter()
            .filter(move |(key, _)| key.as_str() != name)
            .flat_map(|(_, sents)| sents.iter().map(Vec::as_slice))
    }
}
