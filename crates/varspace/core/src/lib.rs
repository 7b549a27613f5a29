//! Typed addresses for the integer namespace of event scripts.
//!
//! Every 32-bit integer that a saved script, event command or database reference uses
//! as an operand designates one slot: a scalar variable, a database cell, or a
//! character/event info field. `varspace-core` partitions that namespace into fixed
//! ranges ([`AddressKind`]), wraps each range in a validated value type, and exposes a
//! [`Classifier`] that tells which kind owns an arbitrary integer.
//!
//! The crate is pure: it performs no I/O and holds no mutable state, so every
//! operation may run on any thread without synchronization.
pub mod address;
pub mod classify;
pub mod config;
pub mod error;
pub mod handle;
pub mod kind;
pub mod range;

pub use address::{
    Address, ChangeableDatabaseAddress, CommonEventVariableAddress, EventInfoAddress,
    HeroInfoAddress, InfoType, MapEventVariableAddress, MemberInfoAddress,
    NormalNumberVariableAddress, RandomVariableAddress, SpareNumberVariableAddress,
    StringVariableAddress, SystemDatabaseAddress, SystemDatabaseVariableAddress,
    SystemStringVariableAddress, SystemVariableAddress, ThisCommonEventVariableAddress,
    ThisMapEventInfoAddress, ThisMapEventVariableAddress, UserDatabaseAddress,
    UserDatabaseVariableAddress,
};
pub use classify::{Classifier, classify};
pub use config::{ClassifierConfig, CoincidentView};
pub use error::{
    AddressError, ClassifyError, ErrorSeverity, InfoTypeError, PartsError, RangeError,
};
pub use handle::AddressHandle;
pub use kind::AddressKind;
pub use range::AddressRange;
