// Site content: services, locations, property types.
// Items are inert display data; only slugs and list order feed the layout tables.

pub mod catalog;
pub mod handlers;
pub mod models;
