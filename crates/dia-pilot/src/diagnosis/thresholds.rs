//! Clinical cut-points expressed as ordered band lists.
//!
//! Each metric owns a [`MetricBands`] list. A value falls into the first band whose
//! cutoff admits it; the final band is always an unbounded catch-all, so every value
//! (including NaN) classifies. Tiers are declared in ascending value order and band
//! lists must follow that order, which keeps lookups monotonic.

use std::fmt::Debug;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Upper edge of a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cutoff {
    /// Admits values strictly below the bound.
    Below(f64),
    /// Admits values up to and including the bound.
    AtMost(f64),
    Unbounded,
}

impl Cutoff {
    fn admits(&self, value: f64) -> bool {
        match *self {
            Cutoff::Below(bound) => value < bound,
            Cutoff::AtMost(bound) => value <= bound,
            Cutoff::Unbounded => true,
        }
    }

    fn bound(&self) -> Option<f64> {
        match *self {
            Cutoff::Below(bound) | Cutoff::AtMost(bound) => Some(bound),
            Cutoff::Unbounded => None,
        }
    }

    /// True when this cutoff admits something `previous` does not.
    /// `Below(x)` followed by `AtMost(x)` narrows the band to the single value `x`.
    fn extends(&self, previous: &Cutoff) -> bool {
        match (*previous, *self) {
            (_, Cutoff::Unbounded) => true,
            (Cutoff::Unbounded, _) => false,
            (Cutoff::Below(prev), Cutoff::AtMost(curr)) => curr >= prev,
            (prev, curr) => curr.bound() > prev.bound(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band<T> {
    pub cutoff: Cutoff,
    pub tier: T,
}

impl<T> Band<T> {
    pub fn new(cutoff: Cutoff, tier: T) -> Self {
        Self { cutoff, tier }
    }
}

/// Marker for the per-metric tier enums.
pub trait Tier: Copy + Ord + Debug {}

/// Validated, contiguous band list for a single metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "Vec<Band<T>>", bound(serialize = "T: Tier + Serialize"))]
pub struct MetricBands<T: Tier> {
    bounded: Vec<Band<T>>,
    catch_all: T,
}

impl<T: Tier> MetricBands<T> {
    pub fn new(bands: Vec<Band<T>>) -> Result<Self, BandError> {
        check_bands(&bands)?;
        let (last, bounded) = bands.split_last().ok_or(BandError::Empty)?;
        Ok(Self {
            bounded: bounded.to_vec(),
            catch_all: last.tier,
        })
    }

    // Only for the built-in table, which is covered by `standard_table_is_valid`.
    fn trusted(bounded: Vec<Band<T>>, catch_all: T) -> Self {
        Self { bounded, catch_all }
    }

    pub fn classify(&self, value: f64) -> T {
        self.bounded
            .iter()
            .find(|band| band.cutoff.admits(value))
            .map_or(self.catch_all, |band| band.tier)
    }

    /// All bands, catch-all included.
    pub fn bands(&self) -> Vec<Band<T>> {
        self.clone().into()
    }
}

impl<T: Tier> From<MetricBands<T>> for Vec<Band<T>> {
    fn from(value: MetricBands<T>) -> Self {
        let mut bands = value.bounded;
        bands.push(Band::new(Cutoff::Unbounded, value.catch_all));
        bands
    }
}

fn check_bands<T: Tier>(bands: &[Band<T>]) -> Result<(), BandError> {
    let last = bands.len().checked_sub(1).ok_or(BandError::Empty)?;

    for (index, band) in bands.iter().enumerate() {
        match band.cutoff.bound() {
            None if index != last => return Err(BandError::CatchAllNotLast { index }),
            None => {}
            Some(bound) if !bound.is_finite() => {
                return Err(BandError::NonFiniteCutoff { index })
            }
            Some(_) if index == last => return Err(BandError::MissingCatchAll),
            Some(_) => {}
        }

        if index == 0 {
            continue;
        }

        let previous = &bands[index - 1];
        if let (Some(prev), Some(curr)) = (previous.cutoff.bound(), band.cutoff.bound()) {
            if !band.cutoff.extends(&previous.cutoff) {
                return Err(BandError::CutoffsNotIncreasing {
                    index,
                    previous: prev,
                    current: curr,
                });
            }
        }

        if band.tier <= previous.tier {
            return Err(BandError::TiersNotIncreasing { index });
        }
    }

    Ok(())
}

/// Structural problem in one band list.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BandError {
    #[error("band list is empty")]
    Empty,
    #[error("band {index} has a non-finite cutoff")]
    NonFiniteCutoff { index: usize },
    #[error("band {index} cutoff {current} admits nothing beyond previous cutoff {previous}")]
    CutoffsNotIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("band {index} tier is not more severe than the band before it")]
    TiersNotIncreasing { index: usize },
    #[error("unbounded band at position {index} must be the last band")]
    CatchAllNotLast { index: usize },
    #[error("last band must be unbounded")]
    MissingCatchAll,
}

/// Threshold table misconfiguration, surfaced before any evaluation runs.
#[derive(Debug, thiserror::Error)]
pub enum ThresholdError {
    #[error("invalid {metric} bands: {source}")]
    Invalid {
        metric: &'static str,
        #[source]
        source: BandError,
    },
    #[error("failed to read threshold table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse threshold table: {0}")]
    Parse(#[from] serde_json::Error),
}

macro_rules! tiers {
    ($($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? })+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
            #[serde(rename_all = "snake_case")]
            pub enum $name {
                $($variant),+
            }

            impl Tier for $name {}
        )+
    };
}

tiers! {
    BmiTier { Underweight, Normal, Overweight, Obese }
    Hba1cTier { Excellent, Good, Suboptimal, Poor, Critical }
    /// Shared by the systolic and diastolic lists.
    PressureTier { Normal, Elevated, High }
    LdlTier { Desirable, Borderline, High }
    /// Higher HDL is protective, so severity runs against declaration order here.
    HdlTier { Low, Acceptable, Protective }
    TriglycerideTier { Normal, High, VeryHigh }
    ExerciseTier { Insufficient, MeetsGuideline }
    SleepTier { Short, Borderline, Healthy, Long }
}

/// Immutable registry of cut-points consulted by every assessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholdTable")]
pub struct ThresholdTable {
    pub bmi: MetricBands<BmiTier>,
    pub hba1c: MetricBands<Hba1cTier>,
    pub systolic: MetricBands<PressureTier>,
    pub diastolic: MetricBands<PressureTier>,
    pub ldl: MetricBands<LdlTier>,
    pub hdl: MetricBands<HdlTier>,
    pub triglycerides: MetricBands<TriglycerideTier>,
    pub exercise: MetricBands<ExerciseTier>,
    pub sleep: MetricBands<SleepTier>,
}

impl ThresholdTable {
    pub fn standard() -> Self {
        use Cutoff::{AtMost, Below};

        Self {
            bmi: MetricBands::trusted(
                vec![
                    Band::new(Below(18.5), BmiTier::Underweight),
                    Band::new(Below(25.0), BmiTier::Normal),
                    Band::new(Below(30.0), BmiTier::Overweight),
                ],
                BmiTier::Obese,
            ),
            hba1c: MetricBands::trusted(
                vec![
                    Band::new(Below(6.5), Hba1cTier::Excellent),
                    Band::new(Below(7.0), Hba1cTier::Good),
                    Band::new(Below(8.0), Hba1cTier::Suboptimal),
                    Band::new(Below(9.0), Hba1cTier::Poor),
                ],
                Hba1cTier::Critical,
            ),
            systolic: MetricBands::trusted(
                vec![
                    Band::new(Below(130.0), PressureTier::Normal),
                    Band::new(Below(140.0), PressureTier::Elevated),
                ],
                PressureTier::High,
            ),
            diastolic: MetricBands::trusted(
                vec![
                    Band::new(Below(80.0), PressureTier::Normal),
                    Band::new(Below(90.0), PressureTier::Elevated),
                ],
                PressureTier::High,
            ),
            ldl: MetricBands::trusted(
                vec![
                    Band::new(AtMost(130.0), LdlTier::Desirable),
                    Band::new(AtMost(160.0), LdlTier::Borderline),
                ],
                LdlTier::High,
            ),
            hdl: MetricBands::trusted(
                vec![
                    Band::new(Below(40.0), HdlTier::Low),
                    Band::new(Below(60.0), HdlTier::Acceptable),
                ],
                HdlTier::Protective,
            ),
            triglycerides: MetricBands::trusted(
                vec![
                    Band::new(AtMost(200.0), TriglycerideTier::Normal),
                    Band::new(AtMost(500.0), TriglycerideTier::High),
                ],
                TriglycerideTier::VeryHigh,
            ),
            exercise: MetricBands::trusted(
                vec![Band::new(Below(2.5), ExerciseTier::Insufficient)],
                ExerciseTier::MeetsGuideline,
            ),
            sleep: MetricBands::trusted(
                vec![
                    Band::new(Below(6.0), SleepTier::Short),
                    Band::new(Below(7.0), SleepTier::Borderline),
                    Band::new(AtMost(9.0), SleepTier::Healthy),
                ],
                SleepTier::Long,
            ),
        }
    }

    /// Load a JSON table. Metrics missing from the file keep their standard bands.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ThresholdError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ThresholdError> {
        let parsed: RawThresholdTable = serde_json::from_str(raw)?;
        Self::try_from(parsed)
    }

    /// Blood pressure is judged by the worse of its two readings.
    pub fn classify_blood_pressure(&self, systolic: u16, diastolic: u16) -> PressureTier {
        self.systolic
            .classify(f64::from(systolic))
            .max(self.diastolic.classify(f64::from(diastolic)))
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn metric<T: Tier>(
    metric: &'static str,
    bands: Vec<Band<T>>,
) -> Result<MetricBands<T>, ThresholdError> {
    MetricBands::new(bands).map_err(|source| ThresholdError::Invalid { metric, source })
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawThresholdTable {
    bmi: Vec<Band<BmiTier>>,
    hba1c: Vec<Band<Hba1cTier>>,
    systolic: Vec<Band<PressureTier>>,
    diastolic: Vec<Band<PressureTier>>,
    ldl: Vec<Band<LdlTier>>,
    hdl: Vec<Band<HdlTier>>,
    triglycerides: Vec<Band<TriglycerideTier>>,
    exercise: Vec<Band<ExerciseTier>>,
    sleep: Vec<Band<SleepTier>>,
}

impl Default for RawThresholdTable {
    fn default() -> Self {
        let standard = ThresholdTable::standard();
        Self {
            bmi: standard.bmi.into(),
            hba1c: standard.hba1c.into(),
            systolic: standard.systolic.into(),
            diastolic: standard.diastolic.into(),
            ldl: standard.ldl.into(),
            hdl: standard.hdl.into(),
            triglycerides: standard.triglycerides.into(),
            exercise: standard.exercise.into(),
            sleep: standard.sleep.into(),
        }
    }
}

impl TryFrom<RawThresholdTable> for ThresholdTable {
    type Error = ThresholdError;

    fn try_from(raw: RawThresholdTable) -> Result<Self, Self::Error> {
        Ok(Self {
            bmi: metric("bmi", raw.bmi)?,
            hba1c: metric("hba1c", raw.hba1c)?,
            systolic: metric("systolic", raw.systolic)?,
            diastolic: metric("diastolic", raw.diastolic)?,
            ldl: metric("ldl", raw.ldl)?,
            hdl: metric("hdl", raw.hdl)?,
            triglycerides: metric("triglycerides", raw.triglycerides)?,
            exercise: metric("exercise", raw.exercise)?,
            sleep: metric("sleep", raw.sleep)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_valid() {
        let table = ThresholdTable::standard();

        assert_eq!(check_bands(&table.bmi.bands()), Ok(()));
        assert_eq!(check_bands(&table.hba1c.bands()), Ok(()));
        assert_eq!(check_bands(&table.systolic.bands()), Ok(()));
        assert_eq!(check_bands(&table.diastolic.bands()), Ok(()));
        assert_eq!(check_bands(&table.ldl.bands()), Ok(()));
        assert_eq!(check_bands(&table.hdl.bands()), Ok(()));
        assert_eq!(check_bands(&table.triglycerides.bands()), Ok(()));
        assert_eq!(check_bands(&table.exercise.bands()), Ok(()));
        assert_eq!(check_bands(&table.sleep.bands()), Ok(()));
    }

    #[test]
    fn hba1c_bands_are_half_open() {
        let table = ThresholdTable::standard();
        assert_eq!(table.hba1c.classify(6.49), Hba1cTier::Excellent);
        assert_eq!(table.hba1c.classify(6.5), Hba1cTier::Good);
        assert_eq!(table.hba1c.classify(7.0), Hba1cTier::Suboptimal);
        assert_eq!(table.hba1c.classify(8.0), Hba1cTier::Poor);
        assert_eq!(table.hba1c.classify(8.99), Hba1cTier::Poor);
        assert_eq!(table.hba1c.classify(9.0), Hba1cTier::Critical);
        assert_eq!(table.hba1c.classify(14.0), Hba1cTier::Critical);
    }

    #[test]
    fn lipid_bands_include_their_upper_bound() {
        let table = ThresholdTable::standard();
        assert_eq!(table.ldl.classify(130.0), LdlTier::Desirable);
        assert_eq!(table.ldl.classify(130.5), LdlTier::Borderline);
        assert_eq!(table.ldl.classify(160.0), LdlTier::Borderline);
        assert_eq!(table.ldl.classify(161.0), LdlTier::High);
        assert_eq!(table.triglycerides.classify(500.0), TriglycerideTier::High);
        assert_eq!(table.triglycerides.classify(501.0), TriglycerideTier::VeryHigh);
    }

    #[test]
    fn sleep_bands_cover_neutral_gap() {
        let table = ThresholdTable::standard();
        assert_eq!(table.sleep.classify(5.9), SleepTier::Short);
        assert_eq!(table.sleep.classify(6.0), SleepTier::Borderline);
        assert_eq!(table.sleep.classify(7.0), SleepTier::Healthy);
        assert_eq!(table.sleep.classify(9.0), SleepTier::Healthy);
        assert_eq!(table.sleep.classify(9.5), SleepTier::Long);
    }

    #[test]
    fn nan_falls_into_catch_all() {
        let table = ThresholdTable::standard();
        assert_eq!(table.hba1c.classify(f64::NAN), Hba1cTier::Critical);
    }

    #[test]
    fn blood_pressure_uses_worse_reading() {
        let table = ThresholdTable::standard();
        assert_eq!(table.classify_blood_pressure(120, 75), PressureTier::Normal);
        assert_eq!(table.classify_blood_pressure(129, 80), PressureTier::Elevated);
        assert_eq!(table.classify_blood_pressure(135, 85), PressureTier::Elevated);
        assert_eq!(table.classify_blood_pressure(120, 95), PressureTier::High);
        assert_eq!(table.classify_blood_pressure(140, 70), PressureTier::High);
    }

    #[test]
    fn rejects_decreasing_cutoffs() {
        let error = MetricBands::new(vec![
            Band::new(Cutoff::Below(7.0), Hba1cTier::Excellent),
            Band::new(Cutoff::Below(6.5), Hba1cTier::Good),
            Band::new(Cutoff::Unbounded, Hba1cTier::Critical),
        ])
        .expect_err("cutoffs must increase");

        assert_eq!(
            error,
            BandError::CutoffsNotIncreasing {
                index: 1,
                previous: 7.0,
                current: 6.5,
            }
        );
    }

    #[test]
    fn accepts_inclusive_band_after_exclusive_one_at_same_bound() {
        let bands = MetricBands::new(vec![
            Band::new(Cutoff::Below(7.0), SleepTier::Short),
            Band::new(Cutoff::AtMost(7.0), SleepTier::Borderline),
            Band::new(Cutoff::Unbounded, SleepTier::Healthy),
        ])
        .expect("below then at-most on one bound is a valid pair");

        assert_eq!(bands.classify(6.99), SleepTier::Short);
        assert_eq!(bands.classify(7.0), SleepTier::Borderline);
        assert_eq!(bands.classify(7.01), SleepTier::Healthy);
    }

    #[test]
    fn rejects_bands_that_admit_nothing_new() {
        let cases = [
            (Cutoff::Below(7.0), Cutoff::Below(7.0)),
            (Cutoff::AtMost(7.0), Cutoff::AtMost(7.0)),
            (Cutoff::AtMost(7.0), Cutoff::Below(7.0)),
        ];

        for (first, second) in cases {
            let error = MetricBands::new(vec![
                Band::new(first, SleepTier::Short),
                Band::new(second, SleepTier::Borderline),
                Band::new(Cutoff::Unbounded, SleepTier::Healthy),
            ]);
            assert_eq!(
                error,
                Err(BandError::CutoffsNotIncreasing {
                    index: 1,
                    previous: 7.0,
                    current: 7.0,
                }),
                "{first:?} then {second:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_order_tiers() {
        let error = MetricBands::new(vec![
            Band::new(Cutoff::Below(6.5), Hba1cTier::Good),
            Band::new(Cutoff::Unbounded, Hba1cTier::Excellent),
        ])
        .expect_err("tiers must worsen");

        assert_eq!(error, BandError::TiersNotIncreasing { index: 1 });
    }

    #[test]
    fn rejects_missing_or_misplaced_catch_all() {
        let missing = MetricBands::new(vec![Band::new(Cutoff::Below(25.0), BmiTier::Normal)]);
        assert_eq!(missing, Err(BandError::MissingCatchAll));

        let misplaced = MetricBands::new(vec![
            Band::new(Cutoff::Unbounded, BmiTier::Normal),
            Band::new(Cutoff::Below(30.0), BmiTier::Obese),
        ]);
        assert_eq!(misplaced, Err(BandError::CatchAllNotLast { index: 0 }));

        let empty = MetricBands::<BmiTier>::new(Vec::new());
        assert_eq!(empty, Err(BandError::Empty));
    }

    #[test]
    fn rejects_non_finite_cutoff() {
        let error = MetricBands::new(vec![
            Band::new(Cutoff::Below(f64::INFINITY), ExerciseTier::Insufficient),
            Band::new(Cutoff::Unbounded, ExerciseTier::MeetsGuideline),
        ]);
        assert_eq!(error, Err(BandError::NonFiniteCutoff { index: 0 }));
    }

    #[test]
    fn json_override_replaces_only_named_metrics() {
        let table = ThresholdTable::from_json(
            r#"{
                "exercise": [
                    { "cutoff": { "below": 3.0 }, "tier": "insufficient" },
                    { "cutoff": "unbounded", "tier": "meets_guideline" }
                ]
            }"#,
        )
        .expect("override parses");

        assert_eq!(table.exercise.classify(2.5), ExerciseTier::Insufficient);
        assert_eq!(table.hba1c, ThresholdTable::standard().hba1c);
    }

    #[test]
    fn json_override_with_bad_bands_fails() {
        let error = ThresholdTable::from_json(
            r#"{ "bmi": [ { "cutoff": { "below": 25.0 }, "tier": "normal" } ] }"#,
        )
        .expect_err("catch-all is required");

        assert!(error.to_string().contains("bmi"));
    }

    #[test]
    fn standard_table_round_trips_through_json() {
        let json = serde_json::to_string(&ThresholdTable::standard()).expect("serializes");
        let parsed = ThresholdTable::from_json(&json).expect("parses");
        assert_eq!(parsed, ThresholdTable::standard());
    }
}
