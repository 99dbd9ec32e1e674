// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   os_to_utf8()      OsString --> String (strict)
//!   os_str_to_utf8()  &OsStr --> &str (strict)
//! ```

pub mod encoding;
