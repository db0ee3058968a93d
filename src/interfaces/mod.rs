// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod visitor;

pub use visitor::{NumeralVisitor, Token, Visit};
