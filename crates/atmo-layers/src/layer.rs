//! The fixed atmospheric layer table.
//!
//! Boundaries are approximate in nature (they move with latitude, season and
//! solar activity) but the table treats them as hard, half-open intervals.

/// One altitude band with its descriptive metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    /// inclusive lower bound (km)
    pub min_km: f64,
    /// exclusive upper bound (km); `None` is unbounded
    pub max_km: Option<f64>,
    pub extent_note: &'static str,
    pub temperature_profile: &'static str,
    pub composition: &'static str,
    pub phenomena: &'static str,
}

impl Layer {
    /// Membership test: inclusive lower, exclusive upper.
    pub fn contains(&self, altitude_km: f64) -> bool {
        let lower_ok = altitude_km >= self.min_km;
        let upper_ok = match self.max_km {
            Some(max) => altitude_km < max,
            None => true,
        };
        lower_ok && upper_ok
    }
}

/// Ordered bottom to top. `min_km` of each entry equals `max_km` of the one below.
pub static LAYERS: [Layer; 5] = [
    Layer {
        name: "Troposphere",
        min_km: 0.0,
        max_km: Some(15.0),
        extent_note: "Surface to ~10–15 km (lower at poles, higher at equator); top is the tropopause.",
        temperature_profile: "Temperature generally decreases with altitude (~6.5 °C per km).",
        composition: "Mostly N₂ and O₂ with water vapor and aerosols; highest gas density.",
        phenomena: "All weather (clouds, rain, storms); strong vertical mixing.",
    },
    Layer {
        name: "Stratosphere",
        min_km: 15.0,
        max_km: Some(50.0),
        extent_note: "~15 to ~50 km; top is the stratopause.",
        temperature_profile: "Temperature increases with altitude (ozone absorbs UV).",
        composition: "Drier air; ozone (O₃) concentrated ~20–30 km; relatively stratified.",
        phenomena: "Commercial jets and some high-altitude aircraft; ozone UV shielding; polar stratospheric clouds.",
    },
    Layer {
        name: "Mesosphere",
        min_km: 50.0,
        max_km: Some(85.0),
        extent_note: "~50 to ~85 km; top is the mesopause (coldest atmospheric region).",
        temperature_profile: "Temperature decreases with altitude; coldest layer overall.",
        composition: "Very thin air; mostly N₂ and O₂ with traces (e.g., CO₂, Na layer).",
        phenomena: "Meteors ablate (‘shooting stars’); noctilucent clouds near the mesopause.",
    },
    Layer {
        name: "Thermosphere",
        min_km: 85.0,
        max_km: Some(600.0),
        extent_note: "~85 to ~600 km (variable); blends upward toward the exosphere.",
        temperature_profile: "Temperature increases dramatically with altitude (absorption of high-energy solar radiation).",
        composition: "Extremely thin; atomic O, N, He; significant ionization (overlaps with ionosphere).",
        phenomena: "Auroras (~100–300 km); many LEO satellites; ISS orbits ~400 km.",
    },
    Layer {
        name: "Exosphere",
        min_km: 600.0,
        max_km: Some(10_000.0),
        extent_note: "~600 km upward, gradually merging into space; no sharp upper boundary.",
        temperature_profile: "No meaningful bulk temperature; particle energies high but densities extremely low.",
        composition: "Extremely sparse H and He dominate; occasional heavier atoms.",
        phenomena: "Very high orbits; spacecraft transition to space environment; ballistic particle trajectories.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_contiguous() {
        for pair in LAYERS.windows(2) {
            assert_eq!(Some(pair[1].min_km), pair[0].max_km, "{} -> {}", pair[0].name, pair[1].name);
            assert!(pair[1].min_km > pair[0].min_km);
        }
        assert_eq!(LAYERS[0].min_km, 0.0);
        assert_eq!(LAYERS[4].max_km, Some(10_000.0));
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = LAYERS.iter().map(|l| l.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LAYERS.len());
    }

    #[test]
    fn contains_is_half_open() {
        let strat = &LAYERS[1];
        assert!(strat.contains(15.0));
        assert!(strat.contains(49.9999));
        assert!(!strat.contains(50.0));
        assert!(!strat.contains(14.9999));
    }

    #[test]
    fn unbounded_layer_has_no_ceiling() {
        let open = Layer {
            max_km: None,
            ..LAYERS[4].clone()
        };
        assert!(open.contains(1.0e9));
        assert!(!open.contains(599.0));
    }
}
