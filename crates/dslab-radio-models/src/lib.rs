#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod options;
pub mod tx;
pub mod units;

pub use tx::config::TxCurrentModelConfig;
pub use tx::current::{TxCurrentModel, TxCurrentModelKind};
pub use tx::current_models::constant::ConstantTxCurrentModel;
pub use tx::current_models::linear::LinearTxCurrentModel;
pub use tx::current_models::piecewise::PiecewiseTxCurrentModel;
