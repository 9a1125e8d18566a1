pub mod epochs;
pub mod model;
pub mod quadrature;

pub use epochs::EpochTransitions;
pub use model::CosmologicalModel;
pub use quadrature::ScaleGrid;
