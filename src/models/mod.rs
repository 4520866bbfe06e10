pub mod offer;
pub mod trip;
