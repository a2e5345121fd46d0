//! Human-readable formatting of lengths, distances and volumes.
//!
//! Each formatter walks a table of magnitude bands and uses the first band
//! whose threshold exceeds `|v|`. The signed value is scaled, so the sign
//! survives while the unit depends on magnitude alone. Scene units are meters.

struct Band {
    below: f64,
    scale: f64,
    decimals: usize,
    suffix: &'static str,
}

struct Bands {
    bands: &'static [Band],
    otherwise: Band,
}

impl Bands {
    fn format(&self, value: f64) -> String {
        let magnitude = value.abs();
        let band = self
            .bands
            .iter()
            .find(|band| magnitude < band.below)
            .unwrap_or(&self.otherwise);
        format!("{:.*} {}", band.decimals, value * band.scale, band.suffix)
    }
}

const LENGTH: Bands = Bands {
    bands: &[
        Band {
            below: 1e-3,
            scale: 1e3,
            decimals: 3,
            suffix: "mm",
        },
        Band {
            below: 1.0,
            scale: 1e2,
            decimals: 3,
            suffix: "cm",
        },
    ],
    otherwise: Band {
        below: f64::INFINITY,
        scale: 1.0,
        decimals: 4,
        suffix: "m",
    },
};

const DISTANCE: Bands = Bands {
    bands: &[
        Band {
            below: 1e-2,
            scale: 1e3,
            decimals: 2,
            suffix: "mm",
        },
        Band {
            below: 1.0,
            scale: 1e2,
            decimals: 2,
            suffix: "cm",
        },
    ],
    otherwise: Band {
        below: f64::INFINITY,
        scale: 1.0,
        decimals: 3,
        suffix: "m",
    },
};

const VOLUME: Bands = Bands {
    bands: &[
        Band {
            below: 1e-9,
            scale: 1e9,
            decimals: 3,
            suffix: "mm³",
        },
        Band {
            below: 1e-6,
            scale: 1e6,
            decimals: 3,
            suffix: "cm³",
        },
        Band {
            below: 1e-3,
            scale: 1e3,
            decimals: 4,
            suffix: "L",
        },
    ],
    otherwise: Band {
        below: f64::INFINITY,
        scale: 1.0,
        decimals: 6,
        suffix: "m³",
    },
};

/// Format a box extent: mm below 1 mm, cm below 1 m, meters otherwise.
pub fn format_length(value: f64) -> String {
    LENGTH.format(value)
}

/// Format a picked point-to-point distance for the measurement label.
///
/// mm below 1 cm, cm below 1 m, meters otherwise; coarser precision than
/// [`format_length`].
pub fn format_distance(value: f64) -> String {
    DISTANCE.format(value)
}

/// Format a volume in mm³, cm³, liters or m³.
pub fn format_volume(value: f64) -> String {
    VOLUME.format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_thresholds() {
        assert_eq!(format_distance(0.005), "5.00 mm");
        assert_eq!(format_distance(0.5), "50.00 cm");
        assert_eq!(format_distance(2.345), "2.345 m");
    }

    #[test]
    fn distance_band_edges() {
        assert_eq!(format_distance(0.01), "1.00 cm");
        assert_eq!(format_distance(1.0), "1.000 m");
        assert_eq!(format_distance(0.0), "0.00 mm");
    }

    #[test]
    fn length_bands() {
        assert_eq!(format_length(0.0005), "0.500 mm");
        assert_eq!(format_length(0.001), "0.100 cm");
        assert_eq!(format_length(0.25), "25.000 cm");
        assert_eq!(format_length(1.0), "1.0000 m");
        assert_eq!(format_length(12.5), "12.5000 m");
    }

    #[test]
    fn length_keeps_sign() {
        assert_eq!(format_length(-0.25), "-25.000 cm");
        assert_eq!(format_length(-3.0), "-3.0000 m");
    }

    #[test]
    fn volume_bands() {
        assert_eq!(format_volume(5e-10), "0.500 mm³");
        assert_eq!(format_volume(1e-9), "0.001 cm³");
        assert_eq!(format_volume(2.5e-7), "0.250 cm³");
        assert_eq!(format_volume(5e-4), "0.5000 L");
        assert_eq!(format_volume(1.0), "1.000000 m³");
    }

    #[test]
    fn non_finite_values_use_largest_unit() {
        assert_eq!(format_length(f64::INFINITY), "inf m");
        assert_eq!(format_volume(f64::NAN), "NaN m³");
    }
}
