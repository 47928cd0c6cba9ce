//! Core value types shared across the client.

mod fare;
mod location;

pub use fare::{
    BusType, DiscountType, FareRequest, FareResponse, InvalidBusType, InvalidDiscountType,
    Language,
};
pub use location::{Location, LocationsResponse, SearchResponse};
