//! Contrato que debe cumplir cualquier artefacto entrenable.
//!
//! El orquestador nunca inspecciona el interior de un artefacto; solo usa
//! estas cuatro operaciones. `save`/`load` deben ser simétricos: todo
//! artefacto recién guardado tiene que poder recargarse, y el orquestador lo
//! comprueba recargando uniformemente desde disco al final de cada build.

use std::path::Path;

use crate::data::TrainData;
use crate::hashing::Fingerprint;

/// Error opaco producido por las operaciones del artefacto.
pub type ArtifactError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub trait Trainable: Sized {
    /// Construye un artefacto vacío listo para entrenar.
    fn with_fingerprint(name: &str, fingerprint: Fingerprint) -> Self;

    fn name(&self) -> &str;

    fn fingerprint(&self) -> &Fingerprint;

    /// Entrena con el agregado completo; síncrono y potencialmente costoso
    /// en CPU.
    fn train(&mut self, data: &TrainData) -> Result<(), ArtifactError>;

    /// Persiste el estado del artefacto bajo su nombre en `cache_dir`.
    fn save(&self, cache_dir: &Path) -> Result<(), ArtifactError>;

    /// Reconstruye un artefacto previamente guardado con `save`.
    fn load(name: &str, cache_dir: &Path) -> Result<Self, ArtifactError>;
}
