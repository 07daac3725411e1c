use super::common::*;

use crate::diagnosis::assessors::{
    Assessor, BloodPressureAssessor, BodyMassAssessor, GlycemicAssessor, LifestyleAssessor,
    LipidAssessor,
};
use crate::diagnosis::profile::{HealthProfile, SmokingStatus, StressLevel};
use crate::diagnosis::recommendations::{Priority, RecommendationCategory};

fn bmi_profile(weight_kg: f64, height_cm: f64) -> HealthProfile {
    HealthProfile {
        weight_kg: Some(weight_kg),
        height_cm: Some(height_cm),
        ..HealthProfile::default()
    }
}

fn pressure_profile(systolic: u16, diastolic: u16) -> HealthProfile {
    HealthProfile {
        blood_pressure_systolic: Some(systolic),
        blood_pressure_diastolic: Some(diastolic),
        ..HealthProfile::default()
    }
}

#[test]
fn every_assessor_ignores_an_empty_profile() {
    let table = standard_table();
    let empty = HealthProfile::default();
    let lifestyle = LifestyleAssessor::default();
    let assessors: [&dyn Assessor; 5] = [
        &BodyMassAssessor,
        &GlycemicAssessor,
        &BloodPressureAssessor,
        &LipidAssessor,
        &lifestyle,
    ];

    for assessor in assessors {
        let contribution = assessor.assess(&empty, &table);
        assert!(contribution.is_empty(), "{:?}", assessor.factor());
    }
}

#[test]
fn body_mass_needs_both_weight_and_height() {
    let profile = HealthProfile {
        weight_kg: Some(120.0),
        ..HealthProfile::default()
    };

    assert!(BodyMassAssessor
        .assess(&profile, &standard_table())
        .is_empty());
}

#[test]
fn healthy_bmi_is_a_positive_factor() {
    let contribution = BodyMassAssessor.assess(&bmi_profile(70.0, 170.0), &standard_table());

    assert_eq!(contribution.positive, 1);
    assert_eq!(contribution.risk, 0);
    assert_eq!(contribution.positives, ["Healthy weight range (BMI: 24.2)"]);
    assert!(contribution.recommendations.is_empty());
}

#[test]
fn bmi_of_exactly_twenty_five_is_overweight() {
    let contribution = BodyMassAssessor.assess(&bmi_profile(100.0, 200.0), &standard_table());

    assert_eq!(contribution.risk, 1);
    assert_eq!(
        contribution.concerns,
        ["Overweight (BMI: 25.0) - Increases insulin resistance"]
    );
    assert_eq!(
        contribution.recommendations[0].category,
        RecommendationCategory::Weight
    );
}

#[test]
fn obesity_carries_a_critical_recommendation() {
    let contribution = BodyMassAssessor.assess(&bmi_profile(100.0, 170.0), &standard_table());

    assert_eq!(contribution.risk, 2);
    assert_eq!(
        contribution.concerns,
        ["Obesity (BMI: 34.6) - Significantly impacts diabetes control"]
    );
    assert_eq!(contribution.recommendations[0].priority, Priority::Critical);
}

#[test]
fn underweight_is_flagged_for_nutrition() {
    let contribution = BodyMassAssessor.assess(&bmi_profile(50.0, 170.0), &standard_table());

    assert_eq!(contribution.risk, 1);
    assert_eq!(
        contribution.recommendations[0].message,
        "Consult nutritionist for healthy weight gain plan"
    );
}

#[test]
fn glycemic_tiers_carry_increasing_risk() {
    let table = standard_table();
    let cases = [
        (6.0, 0, 2, "Excellent glucose control (HbA1c: 6%)"),
        (6.5, 0, 1, "Good glucose control (HbA1c: 6.5%)"),
        (7.4, 2, 0, "Suboptimal glucose control (HbA1c: 7.4%)"),
        (8.5, 3, 0, "Poor glucose control (HbA1c: 8.5%)"),
        (9.0, 4, 0, "Critical glucose control (HbA1c: 9%)"),
    ];

    for (value, risk, positive, message) in cases {
        let contribution = GlycemicAssessor.assess(&hba1c_only(value), &table);
        assert_eq!(contribution.risk, risk, "hba1c {value}");
        assert_eq!(contribution.positive, positive, "hba1c {value}");

        let messages: Vec<_> = contribution
            .concerns
            .iter()
            .chain(contribution.positives.iter())
            .collect();
        assert_eq!(messages, [message]);
    }
}

#[test]
fn good_glucose_control_still_advises_maintenance() {
    let contribution = GlycemicAssessor.assess(&hba1c_only(6.8), &standard_table());

    assert_eq!(contribution.recommendations.len(), 1);
    assert_eq!(contribution.recommendations[0].priority, Priority::Medium);
    assert_eq!(
        contribution.recommendations[0].message,
        "Maintain current management plan"
    );
}

#[test]
fn blood_pressure_requires_both_readings() {
    let profile = HealthProfile {
        blood_pressure_systolic: Some(180),
        ..HealthProfile::default()
    };

    assert!(BloodPressureAssessor
        .assess(&profile, &standard_table())
        .is_empty());
}

#[test]
fn blood_pressure_takes_the_worse_reading() {
    let table = standard_table();

    let normal = BloodPressureAssessor.assess(&pressure_profile(129, 79), &table);
    assert_eq!(normal.positives, ["Healthy blood pressure (129/79)"]);

    let elevated = BloodPressureAssessor.assess(&pressure_profile(130, 70), &table);
    assert_eq!(elevated.risk, 1);
    assert_eq!(elevated.concerns, ["Elevated blood pressure (130/70)"]);

    let high = BloodPressureAssessor.assess(&pressure_profile(120, 90), &table);
    assert_eq!(high.risk, 2);
    assert_eq!(high.concerns, ["High blood pressure (120/90)"]);
    assert_eq!(high.recommendations[0].priority, Priority::High);
}

#[test]
fn lipid_checks_accumulate_independently() {
    let profile = HealthProfile {
        cholesterol_ldl: Some(170.0),
        cholesterol_hdl: Some(35.0),
        triglycerides: Some(250.0),
        ..HealthProfile::default()
    };

    let contribution = LipidAssessor.assess(&profile, &standard_table());

    assert_eq!(contribution.risk, 5);
    assert_eq!(
        contribution.concerns,
        [
            "High LDL cholesterol (170 mg/dL)",
            "Low HDL cholesterol (35 mg/dL)",
            "High triglycerides (250 mg/dL)",
        ]
    );
    assert_eq!(contribution.recommendations.len(), 3);
}

#[test]
fn lipid_middle_bands_are_neutral() {
    let profile = HealthProfile {
        cholesterol_ldl: Some(130.0),
        cholesterol_hdl: Some(45.0),
        triglycerides: Some(200.0),
        ..HealthProfile::default()
    };

    assert!(LipidAssessor.assess(&profile, &standard_table()).is_empty());
}

#[test]
fn very_high_triglycerides_are_critical() {
    let profile = HealthProfile {
        triglycerides: Some(650.0),
        cholesterol_hdl: Some(60.0),
        ..HealthProfile::default()
    };

    let contribution = LipidAssessor.assess(&profile, &standard_table());

    assert_eq!(contribution.risk, 3);
    assert_eq!(contribution.positive, 1);
    assert_eq!(contribution.positives, ["Good HDL cholesterol (60 mg/dL)"]);
    assert_eq!(
        contribution.recommendations[0].message,
        "Urgent care needed - pancreatitis risk"
    );
}

#[test]
fn recorded_zero_exercise_is_assessed() {
    let profile = HealthProfile {
        exercise_hours_per_week: Some(0.0),
        ..HealthProfile::default()
    };

    let contribution = LifestyleAssessor::default().assess(&profile, &standard_table());

    assert_eq!(contribution.risk, 1);
    assert_eq!(
        contribution.concerns,
        ["Insufficient physical activity (0h/week)"]
    );
}

#[test]
fn sleep_bands_split_short_borderline_healthy_and_long() {
    let table = standard_table();
    let assess = |hours: f64| {
        let profile = HealthProfile {
            sleep_hours_per_night: Some(hours),
            ..HealthProfile::default()
        };
        LifestyleAssessor::default().assess(&profile, &table)
    };

    assert_eq!(assess(5.5).concerns, ["Insufficient sleep (5.5h/night)"]);
    assert!(assess(6.0).is_empty());
    assert_eq!(assess(7.0).positives, ["Healthy sleep duration (7h/night)"]);
    assert_eq!(assess(9.0).positive, 1);
    assert!(assess(9.5).is_empty());
}

#[test]
fn smoking_and_stress_only_count_when_recorded() {
    let table = standard_table();
    let assessor = LifestyleAssessor::default();

    let smoker = HealthProfile {
        smoking_status: Some(SmokingStatus::Current),
        stress_level: Some(StressLevel::High),
        ..HealthProfile::default()
    };
    let contribution = assessor.assess(&smoker, &table);
    assert_eq!(contribution.risk, 4);
    assert_eq!(
        contribution.concerns,
        [
            "Current smoker - major complication risk",
            "High stress levels affect glucose control",
        ]
    );
    assert_eq!(
        contribution.recommendations[1].category,
        RecommendationCategory::MentalHealth
    );

    let former = HealthProfile {
        smoking_status: Some(SmokingStatus::Former),
        stress_level: Some(StressLevel::Medium),
        ..HealthProfile::default()
    };
    assert!(assessor.assess(&former, &table).is_empty());
}
