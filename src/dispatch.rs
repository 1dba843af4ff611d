use crate::training::{Running, SportsWalking, Swimming, Training};
use anyhow::{Result, bail};

/// Decode a raw sensor package into the matching training variant.
///
/// `data` is positional: RUN = (action, duration, weight), WLK adds height,
/// SWM adds pool length and lap count.
///
/// # Errors
///
/// Fails on an unrecognized workout code, or when the field count does not
/// match the variant's constructor.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training> {
    match (workout_type, data) {
        ("RUN", &[action, duration_h, weight_kg]) => Ok(Training::Running(Running {
            action: action_count(action),
            duration_h,
            weight_kg,
        })),
        ("WLK", &[action, duration_h, weight_kg, height_cm]) => {
            Ok(Training::SportsWalking(SportsWalking {
                action: action_count(action),
                duration_h,
                weight_kg,
                height_cm,
            }))
        }
        ("SWM", &[action, duration_h, weight_kg, pool_length_m, pool_count]) => {
            Ok(Training::Swimming(Swimming {
                action: action_count(action),
                duration_h,
                weight_kg,
                pool_length_m,
                pool_count,
            }))
        }
        ("RUN" | "WLK" | "SWM", _) => bail!(
            "Workout package {workout_type} has {} fields, which does not match its constructor",
            data.len()
        ),
        _ => bail!("Unrecognized workout code: {workout_type:?}"),
    }
}

// Sensor action counts arrive on the wire as numbers but are whole counts.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn action_count(raw: f64) -> u32 {
    raw as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_build_matching_variants() {
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!(matches!(run, Training::Running(_)));

        let wlk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!(matches!(wlk, Training::SportsWalking(_)));

        let swm = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert!(matches!(swm, Training::Swimming(_)));
    }

    #[test]
    fn unknown_code_errors() {
        let err = read_package("BIKE", &[1.0, 1.0, 70.0]).unwrap_err();
        assert!(err.to_string().contains("Unrecognized workout code"));
    }

    #[test]
    fn wrong_field_count_errors() {
        // RUN takes exactly 3 fields.
        assert!(read_package("RUN", &[15000.0, 1.0]).is_err());
        assert!(read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).is_err());
        // SWM takes exactly 5.
        assert!(read_package("SWM", &[720.0, 1.0, 80.0, 25.0]).is_err());
    }

    #[test]
    fn dispatched_package_renders_summary() {
        let t = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(
            t.info().render(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 699.750."
        );
    }
}
