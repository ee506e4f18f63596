//! Libro de cache: decide si un artefacto se reutiliza o se reconstruye.
//!
//! Por cada nombre persiste `<name>.hash` con exactamente el hex del
//! fingerprint (ver `hashing`). `classify` solo lee; el registro se escribe
//! únicamente tras un rebuild exitoso, vía escritura a temporal + rename
//! para que un lector vea el valor viejo o el nuevo, nunca uno parcial.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::hashing::{lines_fingerprint, Fingerprint};

/// Resultado de clasificar un artefacto; ambos llevan el fingerprint recién
/// calculado de sus entradas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheDecision {
    /// El registro en disco coincide: el artefacto se recarga tal cual.
    Reusable(Fingerprint),
    /// Registro ausente, distinto, o recarga forzada: hay que reconstruir.
    Stale(Fingerprint),
}

#[derive(Debug, Clone)]
pub struct CacheLedger {
    cache_dir: PathBuf,
    version: String,
}

impl CacheLedger {
    pub fn new(cache_dir: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self { cache_dir: cache_dir.into(),
               version: version.into() }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Clasifica `name` comparando el fingerprint de `lines` (salado con la
    /// versión del ledger) contra el registro persistido. Sin efectos: solo
    /// lectura.
    pub fn classify(&self, name: &str, lines: &[String], reload_requested: bool) -> CacheDecision {
        let fresh = lines_fingerprint(&self.version, lines);
        if reload_requested {
            return CacheDecision::Stale(fresh);
        }
        match fs::read_to_string(self.record_path(name)) {
            Ok(stored) if stored == fresh.as_str() => CacheDecision::Reusable(fresh),
            _ => CacheDecision::Stale(fresh),
        }
    }

    /// Ruta del registro de fingerprint de `name`.
    pub fn record_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{name}.hash"))
    }

    /// Persiste el registro de `name`. Escribe a `<name>.hash.tmp` y
    /// renombra encima del definitivo; el rename es atómico dentro del
    /// mismo directorio.
    pub fn persist(&self, name: &str, fingerprint: &Fingerprint) -> io::Result<()> {
        let tmp = self.cache_dir.join(format!("{name}.hash.tmp"));
        fs::write(&tmp, fingerprint.as_str())?;
        fs::rename(&tmp, self.record_path(name))
    }
}
