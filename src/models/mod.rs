mod endpoint;
mod product;
mod user;

pub use endpoint::{EndpointDescriptor, ENDPOINTS};
pub use product::{sample_products, CreateProduct};
pub use user::{sample_users, CreateUser};

/// Parsed request body: whatever JSON object the client sent, or nothing.
pub type JsonBody = serde_json::Map<String, serde_json::Value>;
