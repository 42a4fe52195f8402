pub use super::resource_prices::Entity as ResourcePrices;
