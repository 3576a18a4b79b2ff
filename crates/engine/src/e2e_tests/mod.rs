//! End-to-end flows.
//!
//! These tests wire the full App over the in-memory adapters:
//! - `InMemoryActorStore` for actor records
//! - `RandomDiceDevice` over a scripted random source
//! - `InMemoryMessageLog` and `TracingNotificationSink` for observable output

mod e2e_helpers;

pub use e2e_helpers::*;
