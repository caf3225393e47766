// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for the chrome components.

pub mod button;
pub mod container;
