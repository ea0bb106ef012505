pub mod drift;
pub mod lattice;
pub mod links;
pub mod orbits;
pub mod waves;

pub use drift::Drift;
pub use lattice::Lattice;
pub use links::Links;
pub use orbits::Orbits;
pub use waves::Waves;
