// Composition root.
//
// - Read config from the environment.
// - Instantiate concrete adapters.
// - Wire adapters into use case handlers.
// - Expose the HTTP routes and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
