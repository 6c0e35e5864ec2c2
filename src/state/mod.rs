// ============================================================================
// STATE MODULE - Estado de página con Rc<RefCell>
// ============================================================================

pub mod scan_state;

pub use scan_state::*;
