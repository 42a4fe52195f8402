// src/lib.rs

use services::price_store::PriceStore;

#[derive(Clone)]
pub struct AppState {
    pub store: PriceStore,
}

pub mod entities {
    pub mod prelude;
    pub mod resource_prices;
}

pub mod services {
    pub mod price_fetcher;
    pub mod price_store;
    pub mod resource_filter;
    pub mod sfl_world;
}

pub mod handlers;
pub mod jobs;
pub mod models;
