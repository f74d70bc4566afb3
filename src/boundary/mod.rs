//! Boundary conditions for the finite-difference derivative operators.
//!
//! The compact schemes that differentiate along an axis need to know what
//! happens at its ends. The codes follow the solver input files:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Periodic |
//! | 1 | Free-slip (symmetric, parity from `npaire`) |
//! | 2 | Dirichlet (one-sided stencils) |
//!
//! A stretched axis additionally carries its `istret`/`beta`, from which
//! the metric terms are rebuilt on demand.

mod condition;

pub use condition::BoundaryCondition;
