//! `idb-lib` - idea store and identifier scheme for idb.
//!
//! Ideas live in one JSON array on disk. Each idea is addressed by a
//! SHA-256 fingerprint of its content, or by the first 7 characters of it.
//!
//! # Quick Start
//!
//! ```no_run
//! use idb_lib::{IdeaStore, IdeaUpdate, ListFilter};
//!
//! let store = IdeaStore::new("/home/me/.idb");
//! store.initialize().unwrap();
//!
//! let idea = store.add("Build a better lamp", Some("uses LEDs")).unwrap();
//! store.set_marked(idea.short_hash(), true).unwrap();
//! store
//!     .update(idea.short_hash(), &IdeaUpdate::new(Some("Build the best lamp"), None))
//!     .unwrap();
//!
//! let done = store.list(ListFilter::Marked).unwrap();
//! assert_eq!(done.len(), 1);
//! ```

pub mod error;
pub mod file;
pub mod id;
pub mod model;
pub mod query;
pub mod store;

pub use error::{IdbError, Result};
pub use id::{Reference, derive_hash, resolve};
pub use model::Idea;
pub use query::{IdeaUpdate, ListFilter};
pub use store::{IdeaStore, STORE_FILE_NAME};
