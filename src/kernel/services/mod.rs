//! Services layer (ports + adapters).
//!
//! - `ports`: collaborator contracts the kernel is written against.
//! - `adapters`: runtime specific implementations.

pub mod adapters;
pub mod bus;
pub mod host;
pub mod ports;

pub use bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
pub use host::{Collaborators, WorkspaceHost};
