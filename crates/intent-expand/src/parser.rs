//! Parser descendente recursivo de plantillas con paréntesis y alternativas.
//!
//! Un único no-terminal (*expr*): una lista de alternativas separadas por
//! `|`, donde cada alternativa es una concatenación de palabras y grupos
//! `( ... )` anidados. El cursor avanza una sola vez por token, sin
//! backtracking; la recursión devuelve `(Fragment, tokens_consumidos)` para
//! que cada nivel quede puro y testeable por separado.

use crate::constants::{ALT_SEP, GROUP_CLOSE, GROUP_OPEN};
use crate::fragment::Fragment;

/// Parsea una secuencia de tokens al árbol de fragmentos que representa.
///
/// `["1", "(", "2", "|", "3", ")"]` produce el árbol equivalente a
/// `1 · (2 | 3)`. Una lista vacía produce `Options([Sentence([])])`, que
/// expande a una única secuencia vacía.
pub fn parse(tokens: &[String]) -> Fragment {
    let (expr, _consumed) = parse_expr(tokens);
    expr
}

/// Parsea y expande en un solo paso; la única entrada que necesita la
/// mayoría de los llamadores.
pub fn expand_parentheses(tokens: &[String]) -> Vec<Vec<String>> {
    parse(tokens).expand()
}

/// Parsea un *expr* desde el inicio de `tokens` hasta su `)` de cierre o el
/// final de la lista. Devuelve el `Options` resultante y cuántos tokens
/// consumió (incluido el `)` de cierre, que no se re-emite).
///
/// Un `)` sin `(` previo termina el *expr* activo aunque sea el más externo,
/// descartando la cola: peculiaridad heredada del comportamiento de
/// referencia, conservada a propósito (ver DESIGN.md).
fn parse_expr(tokens: &[String]) -> (Fragment, usize) {
    let mut alternatives: Vec<Fragment> = Vec::new();
    let mut current: Vec<Fragment> = Vec::new();
    let mut pos = 0;

    while pos < tokens.len() {
        let token = &tokens[pos];
        pos += 1;
        match token.as_str() {
            GROUP_OPEN => {
                let (sub, consumed) = parse_expr(&tokens[pos..]);
                pos += consumed;
                // Un Options anidado queda como hijo de la Sentence y se
                // expande en su posición.
                current.push(sub);
            }
            ALT_SEP => {
                alternatives.push(Fragment::Sentence(std::mem::take(&mut current)));
            }
            GROUP_CLOSE => break,
            _ => current.push(Fragment::Word(token.clone())),
        }
    }

    alternatives.push(Fragment::Sentence(current));
    (Fragment::Options(alternatives), pos)
}
