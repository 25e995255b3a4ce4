// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod banks;
pub mod dashboard;
pub mod expense;
pub mod exporter;
pub mod health;
pub mod income;
pub mod users;
