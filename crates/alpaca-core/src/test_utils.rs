/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Helpers shared by unit and integration tests of the alpaca-* crates.

use crate::config::{Config, Credentials};

/// Key id used by [`test_config`].
pub const TEST_KEY_ID: &str = "test-key-id";

/// Secret used by [`test_config`].
pub const TEST_SECRET_KEY: &str = "test-secret-key";

/// Default tolerance for floating-point comparisons
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Paper-mode config whose hosts live under `server_uri`, one path prefix per
/// API base (`{server_uri}/paper-api/`, `{server_uri}/data/`, ...).
pub fn test_config(server_uri: &str) -> Config {
  let template = format!("{}/{}", server_uri.trim_end_matches('/'), crate::BASE_PLACEHOLDER);
  Config::new(Credentials::new(TEST_KEY_ID, TEST_SECRET_KEY), true)
    .with_host_template(template)
    .expect("test host template must be valid")
}

/// Assert that two floating-point numbers are approximately equal
pub fn assert_approx_eq(actual: f64, expected: f64) {
  assert!(
    (actual - expected).abs() < DEFAULT_TOLERANCE,
    "Values not approximately equal:\n  actual:   {}\n  expected: {}",
    actual,
    expected
  );
}
