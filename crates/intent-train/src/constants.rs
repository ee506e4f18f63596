//! Constantes del núcleo de entrenamiento.
//!
//! Valores estáticos que participan en el cálculo de fingerprints. Cambiar
//! `CACHE_VERSION` invalida determinísticamente toda la cache aunque las
//! líneas de entrada no cambien; subirla solo cuando el formato persistido
//! o la semántica de expansión sean incompatibles.

/// Versión lógica de la cache. Se antepone a las líneas de entrada al
/// calcular el fingerprint (ver `hashing::lines_fingerprint`).
pub const CACHE_VERSION: &str = "0.1";
