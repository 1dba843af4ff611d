/// Summary of one completed workout, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl InfoMessage {
    /// Render the fixed summary template. Every numeric field is printed
    /// with exactly 3 decimals, independent of locale.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories
        )
    }
}
