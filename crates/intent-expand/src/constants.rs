//! Constantes de la gramática de plantillas.
//!
//! Tres átomos reservados actúan como puntuación; cualquier otro token es
//! una palabra literal. Cambiarlos altera el lenguaje aceptado por el
//! parser, así que viven aquí y no repartidos por el código.

/// Abre un grupo opcional / de alternativas.
pub const GROUP_OPEN: &str = "(";

/// Separa alternativas dentro de un grupo.
pub const ALT_SEP: &str = "|";

/// Cierra el grupo activo.
pub const GROUP_CLOSE: &str = ")";
