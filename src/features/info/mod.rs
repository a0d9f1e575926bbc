//! Service information and liveness.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | List the available endpoints and model status |
//! | GET | `/health` | Liveness check |

pub mod dtos;
pub mod handlers;
pub mod routes;
