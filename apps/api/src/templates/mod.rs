// Template & color registry: static catalogs, lookups, and customization
// resolution for the rendering layer. Catalogs are compiled in and read-only.

pub mod catalog;
pub mod colors;
pub mod customization;
pub mod handlers;
