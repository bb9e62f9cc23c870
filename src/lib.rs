// Charades: themed topic picker for party games.
//
// This is the library root. The selector is the core; the other modules
// load its catalog, configure it, and present what it picks.

pub mod catalog;
pub mod config;
pub mod output;
pub mod selector;
pub mod session;
