// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Coppice crates; see the `examples/` directory.
