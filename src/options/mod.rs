//! Options chain model and contract selection.

pub mod chain;
pub mod selector;

pub use chain::{ChainRequest, ChainResponse, ExpirationMap, OptionsChain};
pub use selector::ContractSelector;
