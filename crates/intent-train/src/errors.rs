//! Errores del núcleo de entrenamiento.
//! Los fallos del artefacto (train/save/load) llegan como error opaco y se
//! envuelven con el nombre del artefacto afectado.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::trainable::ArtifactError;

#[derive(Debug, Error)]
pub enum TrainError {
    /// No se pudo crear el directorio de cache; aborta antes de planificar
    /// ningún rebuild.
    #[error("cache directory unavailable: {0}")]
    CacheDirUnavailable(#[source] io::Error),

    /// `train`, `save` o la escritura del registro de fingerprint fallaron
    /// para un artefacto stale.
    #[error("rebuild of '{name}' failed: {source}")]
    Rebuild {
        name: String,
        #[source]
        source: ArtifactError,
    },

    /// `load` falló para un nombre que debía estar en cache: asimetría
    /// save/load o corrupción externa del directorio.
    #[error("reload of '{name}' failed: {source}")]
    Reload {
        name: String,
        #[source]
        source: ArtifactError,
    },

    /// No se pudo leer el fichero fuente de `register_from_source`.
    #[error("cannot read training source '{path}': {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
