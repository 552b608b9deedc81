//! Move sets, outcome rules, and the help table.

mod moves;
mod rules;
mod table;

pub use moves::MoveSet;
pub use rules::GameRules;
pub use table::HelpTable;
