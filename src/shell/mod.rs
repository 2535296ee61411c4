// Composition root for the work_logs bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory store and mailer.
// - Wire them into the report use case handlers.
// - Expose the HTTP and GraphQL router.

pub mod auth;
pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
