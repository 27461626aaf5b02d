pub mod product;
pub mod pricing;

pub use product::{Catalog, CatalogEntry, CatalogError, CatalogId};
pub use pricing::{PricingEngine, RentalPeriod, MAX_RENTAL_DAYS};
