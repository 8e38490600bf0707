//! Common - Shared Types for the NFT Bridge Contracts
//!
//! This package holds the wire interface of the NFT contract. The bridge
//! drives token custody exclusively through these messages, and the
//! reference NFT contract implements them.

pub mod nft;

pub use nft::{NftExecuteMsg, NftQueryMsg};
