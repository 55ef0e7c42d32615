//! # State Module
//!
//! Session state owned by the [`Storefront`](crate::Storefront) root.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Storefront (app root)                      │   │
//! │  │  created once per session, passed by reference to commands     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                     ┌──────────────────┐                                │
//! │                     │    CartStore     │                                │
//! │                     │                  │                                │
//! │                     │  Mutex<Cart      │                                │
//! │                     │    State>        │                                │
//! │                     │  watch::Sender   │                                │
//! │                     └──────────────────┘                                │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: one Mutex around the read-modify-publish sequence        │
//! │  • ProductSource: stateless apart from its HTTP connection pool        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

pub use cart::CartStore;
