use crate::message::InfoMessage;

/// Step length in meters for step-counting disciplines.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in meters; swimming counts strokes, not steps.
pub const LEN_STROKE: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

mod running_coeff {
    pub const SPEED_FACTOR: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;
}

mod walking_coeff {
    pub const WEIGHT_FACTOR: f64 = 0.035;
    pub const SPEED_PER_HEIGHT_FACTOR: f64 = 0.029;
}

mod swimming_coeff {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_FACTOR: f64 = 2.0;
}

#[derive(Debug, Clone)]
pub struct Running {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone)]
pub struct SportsWalking {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone)]
pub struct Swimming {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_count: f64,
}

/// A single recorded workout. Fields are fixed at construction; every
/// metric is recomputed on demand.
#[derive(Debug, Clone)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running(_) => "Running",
            Self::SportsWalking(_) => "SportsWalking",
            Self::Swimming(_) => "Swimming",
        }
    }

    const fn action(&self) -> u32 {
        match self {
            Self::Running(t) => t.action,
            Self::SportsWalking(t) => t.action,
            Self::Swimming(t) => t.action,
        }
    }

    #[must_use]
    pub const fn duration_h(&self) -> f64 {
        match self {
            Self::Running(t) => t.duration_h,
            Self::SportsWalking(t) => t.duration_h,
            Self::Swimming(t) => t.duration_h,
        }
    }

    const fn weight_kg(&self) -> f64 {
        match self {
            Self::Running(t) => t.weight_kg,
            Self::SportsWalking(t) => t.weight_kg,
            Self::Swimming(t) => t.weight_kg,
        }
    }

    /// Distance covered in km, from the raw action count.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        let action_len = match self {
            Self::Swimming(_) => LEN_STROKE,
            Self::Running(_) | Self::SportsWalking(_) => LEN_STEP,
        };
        f64::from(self.action()) * action_len / M_IN_KM
    }

    /// Mean speed in km/h. Swimming derives it from pool geometry
    /// rather than stroke count.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming(t) => t.pool_length_m * t.pool_count / M_IN_KM / t.duration_h,
            Self::Running(_) | Self::SportsWalking(_) => self.distance_km() / self.duration_h(),
        }
    }

    /// Energy spent in kcal, per-discipline formula.
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        let weight = self.weight_kg();

        match self {
            Self::Running(t) => {
                (running_coeff::SPEED_FACTOR * speed - running_coeff::SPEED_SHIFT) * weight
                    / M_IN_KM
                    * t.duration_h
                    * MIN_IN_H
            }
            Self::SportsWalking(t) => {
                (walking_coeff::WEIGHT_FACTOR * weight
                    + (speed.powi(2) / t.height_cm).floor()
                        * walking_coeff::SPEED_PER_HEIGHT_FACTOR
                        * weight)
                    * t.duration_h
                    * MIN_IN_H
            }
            Self::Swimming(_) => {
                (speed + swimming_coeff::SPEED_SHIFT) * swimming_coeff::WEIGHT_FACTOR * weight
            }
        }
    }

    #[must_use]
    pub fn info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.label(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}
