//! # Cart Store
//!
//! > **A persistent shopping-cart state manager built on the Actor Model.**
//!
//! This crate keeps an in-memory list of purchased items, validates every
//! mutation against an external inventory service, and mirrors each accepted
//! change into durable storage so the cart survives a restart.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why an Actor?
//!
//! A cart mutation spans two suspension points: the fresh stock lookup and
//! the persistence write. If two `add` calls for the same product could
//! interleave between those points, both would pass a stale stock check and
//! together overrun the ceiling. The store therefore runs as a single actor:
//! all mutations flow through one mailbox and are processed to completion,
//! one at a time.
//!
//! This combination provides:
//! - **Single-flight mutations**: No `Mutex`, no double-commit race.
//! - **Uniform failure reporting**: Every rejection leaves state untouched
//!   and emits exactly one human-readable notice.
//! - **Atomic commits**: Memory and the persisted mirror always change
//!   together.
//!
//! ### Collaborators as Seams
//! The inventory service, the persistence slot, and the notification channel
//! are traits injected at startup, not globals. Production wires real
//! services; tests wire [`oracle::MockOracle`], [`mirror::InMemoryMirror`]
//! and [`notify::RecordingSink`] and observe every side effect.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`store`])
//! The `CartActor` event loop: hydration, the three mutation handlers, and
//! the commit protocol.
//! - **Key items**: [`store::CartActor`], [`store::CartContext`], [`store::CartError`].
//!
//! ### 2. The Interface ([`client`])
//! We don't expose raw message passing to the rest of the app.
//! - **Key items**: [`client::CartClient`]: async mutations, non-blocking
//!   [`snapshot`](client::CartClient::snapshot), and a
//!   [`watch`](client::CartClient::watch) subscription for reactive consumers.
//!
//! ### 3. The Collaborators ([`oracle`], [`mirror`], [`notify`])
//! Trait seams plus ready-made implementations: an in-memory inventory, a
//! scripted mock, in-memory and file-backed mirrors, and channel/recording
//! sinks.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`lifecycle::CartSystem`] spawns the actor with its context injected and
//! joins it on shutdown; [`lifecycle::setup_tracing`] configures logging.
//!
//! ## 🚀 Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cart_store::lifecycle::CartSystem;
//! use cart_store::mirror::InMemoryMirror;
//! use cart_store::model::Product;
//! use cart_store::notify::ChannelSink;
//! use cart_store::oracle::InMemoryInventory;
//! use cart_store::store::{CartContext, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let inventory = InMemoryInventory::new();
//!     inventory.stock(Product::new(1, "Trail Sneaker", 129.9, "sneaker.png"), 3);
//!
//!     let (sink, _notices) = ChannelSink::channel();
//!     let system = CartSystem::start(
//!         StoreConfig::default(),
//!         CartContext {
//!             oracle: Arc::new(inventory),
//!             mirror: Arc::new(InMemoryMirror::new()),
//!             notifier: Arc::new(sink),
//!         },
//!     );
//!
//!     system.client.add(1).await.unwrap();
//!     assert_eq!(system.client.snapshot().quantity_of(1), 1);
//!
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod client;
pub mod lifecycle;
pub mod mirror;
pub mod model;
pub mod notify;
pub mod oracle;
pub mod store;
