// Copyright (c) 2025 The Botho Foundation

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

//! Common utilities shared by the DualDory crates.

#[cfg(feature = "std")]
extern crate std;

pub mod logger;
