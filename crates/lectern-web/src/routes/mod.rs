mod health;
mod passage;
mod translations;

pub use health::health_routes;
pub use passage::passage_routes;
pub use translations::translation_routes;
