use crate::ast::Statement;

const GAYATRI: &str = "gayatri";
const MAHAMRITYUNJAYA: &str = "mahamrityunjaya";

/// Returns the names of every prebuilt program, in catalog order.
#[must_use]
pub const fn names() -> &'static [&'static str] {
    &[GAYATRI, MAHAMRITYUNJAYA]
}

/// Looks up a prebuilt program by name.
///
/// Unknown names yield `None`.
///
/// # Example
/// ```
/// use sabdastra::{ast::Statement, mantra::lookup};
///
/// assert_eq!(lookup("gayatri"),
///            Some(vec![Statement::Print { value: "'Wisdom unlocked'".to_string() }]));
/// assert_eq!(lookup("om"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Vec<Statement>> {
    match name {
        GAYATRI => Some(gayatri()),
        MAHAMRITYUNJAYA => Some(mahamrityunjaya()),
        _ => None,
    }
}

fn gayatri() -> Vec<Statement> {
    vec![Statement::Print { value: "'Wisdom unlocked'".to_string() }]
}

/// Defines `protect` and then calls it.
fn mahamrityunjaya() -> Vec<Statement> {
    vec![Statement::FunctionDef { name:   "protect".to_string(),
                                  params: Vec::new(),
                                  body:   vec![Statement::Print { value: "'Protection invoked'".to_string() }], },
         Statement::Call { text: "protect".to_string() }]
}
