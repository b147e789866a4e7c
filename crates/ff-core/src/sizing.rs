//! Size selection: a standard token or four body measurements.

use crate::error::SizeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeToken {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl SizeToken {
    pub const ALL: [SizeToken; 6] = [
        SizeToken::XS,
        SizeToken::S,
        SizeToken::M,
        SizeToken::L,
        SizeToken::XL,
        SizeToken::XXL,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SizeToken::XS => "XS",
            SizeToken::S => "S",
            SizeToken::M => "M",
            SizeToken::L => "L",
            SizeToken::XL => "XL",
            SizeToken::XXL => "XXL",
        }
    }
}

impl FromStr for SizeToken {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SizeToken::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SizeError::UnknownToken(s.to_string()))
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four custom body measurements, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementField {
    Chest,
    Waist,
    Height,
    Shoulder,
}

impl MeasurementField {
    pub const ALL: [MeasurementField; 4] = [
        MeasurementField::Chest,
        MeasurementField::Waist,
        MeasurementField::Height,
        MeasurementField::Shoulder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MeasurementField::Chest => "chest",
            MeasurementField::Waist => "waist",
            MeasurementField::Height => "height",
            MeasurementField::Shoulder => "shoulder",
        }
    }

    /// Inclusive plausible range `(min, max)`.
    pub fn range(self) -> (f32, f32) {
        match self {
            MeasurementField::Chest => (60.0, 150.0),
            MeasurementField::Waist => (60.0, 140.0),
            MeasurementField::Height => (140.0, 220.0),
            MeasurementField::Shoulder => (35.0, 60.0),
        }
    }

    pub fn validate(self, value: f32) -> Result<f32, SizeError> {
        let (min, max) = self.range();
        if value.is_finite() && (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(SizeError::OutOfRange {
                field: self.name(),
                value,
                min,
                max,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub chest: f32,
    pub waist: f32,
    pub height: f32,
    pub shoulder: f32,
}

impl Measurements {
    pub fn new(chest: f32, waist: f32, height: f32, shoulder: f32) -> Result<Self, SizeError> {
        Ok(Self {
            chest: MeasurementField::Chest.validate(chest)?,
            waist: MeasurementField::Waist.validate(waist)?,
            height: MeasurementField::Height.validate(height)?,
            shoulder: MeasurementField::Shoulder.validate(shoulder)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SizeSelection {
    Standard { size: SizeToken },
    Custom(Measurements),
}

impl SizeSelection {
    pub fn standard(token: SizeToken) -> Self {
        SizeSelection::Standard { size: token }
    }

    pub fn custom(chest: f32, waist: f32, height: f32, shoulder: f32) -> Result<Self, SizeError> {
        Measurements::new(chest, waist, height, shoulder).map(SizeSelection::Custom)
    }

    /// Label shown in the order summary.
    pub fn label(&self) -> &'static str {
        match self {
            SizeSelection::Standard { size } => size.as_str(),
            SizeSelection::Custom(_) => "Custom measurements",
        }
    }
}

/// Which half of the sizing form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    #[default]
    Standard,
    Custom,
}

/// Sizing form state.
///
/// Custom measurements are collected field by field; the selection only
/// becomes `Custom` once all four are present and in range.
#[derive(Debug, Clone, Default)]
pub struct SizingForm {
    pub mode: SizeMode,
    selection: Option<SizeSelection>,
    draft: [Option<f32>; 4],
}

impl SizingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<SizeSelection> {
        self.selection
    }

    pub fn set_mode(&mut self, mode: SizeMode) {
        self.mode = mode;
    }

    pub fn select_standard(&mut self, token: SizeToken) {
        self.mode = SizeMode::Standard;
        self.selection = Some(SizeSelection::standard(token));
    }

    pub fn draft(&self, field: MeasurementField) -> Option<f32> {
        self.draft[field as usize]
    }

    /// Record one measurement. Out-of-range values are rejected and leave
    /// the draft untouched.
    pub fn set_measurement(&mut self, field: MeasurementField, value: f32) -> Result<(), SizeError> {
        let value = field.validate(value)?;
        self.mode = SizeMode::Custom;
        self.draft[field as usize] = Some(value);

        if let [Some(chest), Some(waist), Some(height), Some(shoulder)] = self.draft {
            self.selection = Some(SizeSelection::Custom(Measurements {
                chest,
                waist,
                height,
                shoulder,
            }));
        }
        Ok(())
    }

    pub fn clear_measurement(&mut self, field: MeasurementField) {
        self.draft[field as usize] = None;
        if matches!(self.selection, Some(SizeSelection::Custom(_))) {
            self.selection = None;
        }
    }
}
