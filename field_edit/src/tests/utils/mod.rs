// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod env;
mod markup;

pub(crate) use env::{Event, Recorder, TestClipboard, TestEnv};
pub(crate) use markup::{parse_markup, render_markup};
