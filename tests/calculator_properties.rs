//! Property checks for the estimator and color helpers over seeded random
//! inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use paintcalc::config::PricingTable;
use paintcalc::models::{RgbColor, RoomSpec, RoomType};
use paintcalc::services::{classify_tone, derive_suggestions, PaintEstimator};
use paintcalc::ValidationError;

const SAMPLES: usize = 500;

fn random_room(rng: &mut StdRng) -> RoomSpec {
    RoomSpec::new(
        rng.random_range(4.0..40.0),
        rng.random_range(4.0..40.0),
        rng.random_range(7.0..16.0),
        rng.random_range(0..3),
        rng.random_range(0..4),
        rng.random_range(1..=3),
    )
    .unwrap()
}

fn random_color(rng: &mut StdRng) -> RgbColor {
    RgbColor::new(rng.random(), rng.random(), rng.random())
}

#[test]
fn test_liters_and_gallons_agree_for_every_room_type() {
    let mut rng = StdRng::seed_from_u64(0x9A1D);
    let estimator = PaintEstimator::default();

    for _ in 0..SAMPLES {
        let room = random_room(&mut rng);
        for room_type in RoomType::ALL {
            let result = estimator.estimate(&room, room_type).unwrap();
            if result.paintable_area < 0 {
                continue;
            }

            assert!(result.liters_needed >= 0, "{room:?} {room_type}: {result:?}");
            let expected_gallons = (result.liters_needed as f64 / 3.78).ceil() as i64;
            assert_eq!(result.gallons_needed, expected_gallons);
            assert_eq!(
                result.estimated_cost,
                result.liters_needed * i64::from(result.cost_per_liter)
            );
        }
    }
}

#[test]
fn test_estimate_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let estimator = PaintEstimator::new(PricingTable::default());

    for _ in 0..SAMPLES {
        let room = random_room(&mut rng);
        let room_type = RoomType::ALL[rng.random_range(0..RoomType::ALL.len())];
        assert_eq!(
            estimator.estimate(&room, room_type),
            estimator.estimate(&room, room_type)
        );
    }
}

#[test]
fn test_total_area_scales_with_coats() {
    let estimator = PaintEstimator::default();
    let one = RoomSpec::new(14.0, 11.0, 9.0, 1, 2, 1).unwrap();
    let three = RoomSpec { coats: 3, ..one };

    let single = estimator.estimate(&one, RoomType::Bedroom).unwrap();
    let triple = estimator.estimate(&three, RoomType::Bedroom).unwrap();
    assert_eq!(triple.paintable_area, single.paintable_area);
    assert_eq!(triple.total_area, single.total_area * 3);
}

#[test]
fn test_double_complement_is_identity() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..SAMPLES {
        let color = random_color(&mut rng);
        let complement = derive_suggestions(color).complementary;
        assert_eq!(derive_suggestions(complement).complementary, color);
    }
}

#[test]
fn test_analogous_stays_within_shift_of_base() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..SAMPLES {
        let color = random_color(&mut rng);
        for shade in derive_suggestions(color).analogous {
            let (r, g, b) = color.channels();
            let (sr, sg, sb) = shade.channels();
            for (base, shifted) in [(r, sr), (g, sg), (b, sb)] {
                assert!(base.abs_diff(shifted) <= 30, "{color} -> {shade}");
            }
        }
    }
}

#[test]
fn test_light_short_circuits_channel_dominance() {
    // Red dominates, but brightness is above the light threshold
    assert_eq!(classify_tone(RgbColor::new(255, 240, 240)).as_str(), "light");
    assert_eq!(classify_tone(RgbColor::WHITE).as_str(), "light");
}

#[test]
fn test_zero_dimension_yields_no_result() {
    let estimator = PaintEstimator::default();

    for (length, width, height, field) in [
        (0.0, 10.0, 10.0, "length"),
        (10.0, 0.0, 10.0, "width"),
        (10.0, 10.0, 0.0, "height"),
    ] {
        let room = RoomSpec {
            length_ft: length,
            width_ft: width,
            height_ft: height,
            door_count: 1,
            window_count: 2,
            coats: 2,
        };
        let err = estimator.estimate(&room, RoomType::LivingRoom).unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveDimension { .. }));
        assert_eq!(err.field(), field);
    }
}
