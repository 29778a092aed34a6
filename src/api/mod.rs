pub mod client;
pub mod traits;
pub mod types;

pub use client::HttpApiClient;
pub use traits::EstateApi;
pub use types::PropertyFilter;
