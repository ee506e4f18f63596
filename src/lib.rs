//! intentflow-rust: librería paraguas del núcleo de intents.
//!
//! Reexpone los dos crates del workspace:
//! - `expand` (`intent-expand`): expansión de plantillas con grupos y
//!   alternativas a todas las frases concretas que representan.
//! - `train` (`intent-train`): orquestador de entrenamiento incremental con
//!   cache de fingerprints por artefacto.

pub use intent_expand as expand;
pub use intent_train as train;
