//! Weighting schemes for term frequency and inverse document frequency.
//!
//! Both families share the numeric codes 0-4 but are interpreted by different
//! functions. Only [`TermWeighting::Log`] and [`IdfWeighting::Log`] have distinct
//! formulas; the remaining schemes are declared but fall through (raw count for term
//! frequency, zero for inverse document frequency).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TermWeighting {
    Binary = 0,
    #[default]
    Raw = 1,
    /// `1 + ln(count)`, or `0` when the term is absent.
    Log = 2,
    DoubleHalf = 3,
    DoubleK = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum IdfWeighting {
    Unary = 0,
    /// `ln(num_docs / (1 + docs_with_term))`.
    #[default]
    Log = 1,
    LogSmooth = 2,
    LogMax = 3,
    Prob = 4,
}

impl TryFrom<u8> for TermWeighting {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Binary),
            1 => Ok(Self::Raw),
            2 => Ok(Self::Log),
            3 => Ok(Self::DoubleHalf),
            4 => Ok(Self::DoubleK),
            _ => Err(Error::InvalidWeighting(code)),
        }
    }
}

impl TryFrom<u8> for IdfWeighting {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unary),
            1 => Ok(Self::Log),
            2 => Ok(Self::LogSmooth),
            3 => Ok(Self::LogMax),
            4 => Ok(Self::Prob),
            _ => Err(Error::InvalidWeighting(code)),
        }
    }
}

impl From<TermWeighting> for u8 {
    fn from(weighting: TermWeighting) -> Self {
        weighting as Self
    }
}

impl From<IdfWeighting> for u8 {
    fn from(weighting: IdfWeighting) -> Self {
        weighting as Self
    }
}
