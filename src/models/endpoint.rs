/// One row of the landing page's endpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn endpoint(
    method: &'static str,
    path: &'static str,
    description: &'static str,
) -> EndpointDescriptor {
    EndpointDescriptor {
        method,
        path,
        description,
    }
}

pub const ENDPOINTS: [EndpointDescriptor; 6] = [
    endpoint("GET", "/", "Welcome page"),
    endpoint("GET", "/api/health", "Health check"),
    endpoint("GET", "/api/users", "List users"),
    endpoint("POST", "/api/users", "Create user"),
    endpoint("GET", "/api/products", "List products (optional ?id=)"),
    endpoint("POST", "/api/products", "Create product"),
];
