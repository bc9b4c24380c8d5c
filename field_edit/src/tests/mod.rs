// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_edit;
mod utils;
