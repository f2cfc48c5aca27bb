//! JSON test vector loader shared by sampling-sequence tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Deserialize;

use lockscope_core::SampleRow;

#[derive(Debug, Deserialize)]
pub struct SampleVector {
    pub description: String,
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub expect: Vec<ExpectGauge>,
    #[serde(default)]
    pub expect_series: Option<usize>,
}

/// One scripted query round: either a row set or a failure.
#[derive(Debug, Deserialize)]
pub struct Round {
    #[serde(default)]
    pub fail: bool,
    #[serde(default)]
    pub rows: Vec<SampleRow>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectGauge {
    pub mode: String,
    pub fastpath: bool,
    pub value: i64,
}
