//! Fingerprints de contenido para la cache de artefactos.
//!
//! El fingerprint es un blake3 en hex sobre la secuencia ordenada
//! `[version_tag, linea_0, linea_1, ...]`. Estable entre ejecuciones y
//! plataformas; cambiar una línea, su orden o la versión cambia el valor.
//! Cada elemento entra al hash con su longitud por delante, de modo que los
//! límites entre líneas son inequívocos incluso con saltos de línea
//! embebidos.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hash estable del contenido versionado de un artefacto.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calcula el fingerprint de `lines` salado con `version`.
///
/// Cada elemento se codifica como `longitud (u64 LE) + bytes`: mover un
/// límite entre líneas, o partir una línea con `\n` embebido en dos, nunca
/// produce el mismo digest.
pub fn lines_fingerprint(version: &str, lines: &[String]) -> Fingerprint {
    let mut hasher = blake3::Hasher::new();
    update_framed(&mut hasher, version.as_bytes());
    for line in lines {
        update_framed(&mut hasher, line.as_bytes());
    }
    Fingerprint(hasher.finalize().to_hex().to_string())
}

fn update_framed(hasher: &mut blake3::Hasher, bytes: &[u8]) {
    hasher.update(&(bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
