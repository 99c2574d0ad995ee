// Copyright (C) Microsoft Corporation. All rights reserved.

//! Backend contracts.
//!
//! Each platform backend implements [`HashSession`]; the streaming context in
//! the `hash` module and the SHA façades are written only against this trait
//! so calling code never branches on which backend was compiled in.
mod hashing;

pub use hashing::*;

use super::*;
