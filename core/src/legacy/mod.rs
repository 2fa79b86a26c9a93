//! Earlier snapshots of the contract.
//!
//! Each module is a self-contained, frozen version of the shapes that
//! changed. Shapes that did not change are shared with the current contract
//! at the crate root. These versions are not reconciled with each other:
//! pick the one matching the [`ContractVersion`](wl_shared::ContractVersion)
//! the peer speaks.

pub mod v1;
pub mod v2;
