pub mod request;

pub use request::{ApiRequest, Pacer};
