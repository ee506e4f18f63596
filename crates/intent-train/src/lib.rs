//! intent-train: entrenamiento incremental con cache de fingerprints.
//!
//! Dado un conjunto de artefactos nombrados y sus líneas de entrada, decide
//! cuáles están stale (entradas cambiadas o cache ausente), reconstruye solo
//! esos —en paralelo o en secuencia— y recarga toda la colección desde
//! disco:
//! - `hashing`: fingerprints blake3 versionados.
//! - `ledger`: registro `<name>.hash` y clasificación reusable/stale.
//! - `data`: agregado de frases expandidas por artefacto.
//! - `trainable`: contrato train/save/load que consume el orquestador.
//! - `manager`: el orquestador (`register` + `build`).

pub mod constants;
pub mod data;
pub mod errors;
pub mod hashing;
pub mod ledger;
pub mod manager;
pub mod trainable;

pub use data::TrainData;
pub use errors::TrainError;
pub use hashing::{lines_fingerprint, Fingerprint};
pub use ledger::{CacheDecision, CacheLedger};
pub use manager::TrainingManager;
pub use trainable::{ArtifactError, Trainable};
