//! Builds the specification string that keys the piping account table.

use crate::config::{Config, SizeBucket, Threshold};

use super::material::Material;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    AboveGround,
    Underground,
}

impl Placement {
    pub fn label(self) -> &'static str {
        match self {
            Placement::AboveGround => "Above Ground",
            Placement::Underground => "Underground",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bore {
    Small,
    Large,
}

impl Bore {
    pub fn label(self) -> &'static str {
        match self {
            Bore::Small => "Small Bore",
            Bore::Large => "Large Bore",
        }
    }
}

pub struct Classifier<'a> {
    ground_level: Threshold,
    small_bore: Threshold,
    buckets: &'a [SizeBucket],
    /// Range shown for small-bore pipe of unknown material: the first bucket.
    small_bore_range: &'a str,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            ground_level: config.ground_level,
            small_bore: config.small_bore,
            buckets: &config.size_buckets,
            small_bore_range: config
                .size_buckets
                .first()
                .map_or("", |b| b.label.as_str()),
        }
    }

    pub fn placement(&self, elevation: f64) -> Placement {
        if self.ground_level.is_above(elevation) {
            Placement::AboveGround
        } else {
            Placement::Underground
        }
    }

    /// Unknown sizes are large bore.
    pub fn bore(&self, size: Option<f64>) -> Bore {
        match size {
            Some(s) if self.small_bore.is_below(s) => Bore::Small,
            _ => Bore::Large,
        }
    }

    /// Label of the bucket covering `size`.
    pub fn size_range(&self, size: f64) -> Option<&'a str> {
        self.buckets
            .iter()
            .find(|b| b.upper.map_or(true, |upper| size <= upper))
            .map(|b| b.label.as_str())
    }

    /// The specification string for one pipe. Never empty.
    pub fn specification(&self, elevation: f64, size: Option<f64>, material: &Material) -> String {
        let placement = self.placement(elevation);
        let bore = self.bore(size);
        let prefix = format!("{} {} Pipe", placement.label(), bore.label());

        match (placement, bore, material.name()) {
            (Placement::AboveGround, Bore::Small, Some(name)) => {
                format!("{} (All-In) ({})", prefix, name)
            }
            (Placement::AboveGround, Bore::Small, None) => {
                format!("{} (All-In) ({})", prefix, self.small_bore_range)
            }
            (Placement::Underground, Bore::Small, Some(name)) => format!("{} - {}", prefix, name),
            (Placement::Underground, Bore::Small, None) => prefix,
            (_, Bore::Large, Some(name)) => match size.and_then(|s| self.size_range(s)) {
                Some(range) => format!("{} ({}) ({} Diameter)", prefix, name, range),
                None => prefix,
            },
            (_, Bore::Large, None) => prefix,
        }
    }
}

/// Description used when required inputs could not be read.
pub fn missing_values(missing: &[&str]) -> String {
    format!("Missing values: {}", missing.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(name: &str) -> Material {
        Material::Known {
            key: name.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_placement_boundary_is_exclusive() {
        let cfg = Config::default();
        let c = Classifier::new(&cfg);
        assert_eq!(c.placement(5.2), Placement::AboveGround);
        assert_eq!(c.placement(-3.5), Placement::Underground);
        assert_eq!(c.placement(0.0), Placement::Underground);
        assert_eq!(c.placement(f64::NEG_INFINITY), Placement::Underground);
    }

    #[test]
    fn test_placement_boundary_configurable() {
        let mut cfg = Config::default();
        cfg.ground_level.inclusive = true;
        let c = Classifier::new(&cfg);
        assert_eq!(c.placement(0.0), Placement::AboveGround);
    }

    #[test]
    fn test_bore() {
        let cfg = Config::default();
        let c = Classifier::new(&cfg);
        assert_eq!(c.bore(Some(0.75)), Bore::Small);
        assert_eq!(c.bore(Some(2.0)), Bore::Small);
        assert_eq!(c.bore(Some(2.5)), Bore::Large);
        assert_eq!(c.bore(None), Bore::Large);

        let mut cfg = Config::default();
        cfg.small_bore.inclusive = false;
        assert_eq!(Classifier::new(&cfg).bore(Some(2.0)), Bore::Large);
    }

    #[test]
    fn test_size_buckets_are_contiguous() {
        let cfg = Config::default();
        let c = Classifier::new(&cfg);
        assert_eq!(c.size_range(0.0), Some("0-2\""));
        assert_eq!(c.size_range(2.5), Some("2.5\"-6\""));
        assert_eq!(c.size_range(6.0), Some("2.5\"-6\""));
        assert_eq!(c.size_range(7.5), Some("8\"-12\""));
        assert_eq!(c.size_range(8.0), Some("8\"-12\""));
        assert_eq!(c.size_range(24.0), Some("14\"-24\""));
        assert_eq!(c.size_range(26.0), Some("26\"-40\""));
        assert_eq!(c.size_range(90.0), Some("74\"-90\""));
        assert_eq!(c.size_range(96.0), Some(">90\""));
        assert_eq!(c.size_range(1e9), Some(">90\""));
    }

    #[test]
    fn test_specification_strings() {
        let cfg = Config::default();
        let c = Classifier::new(&cfg);
        let ss = known("Stainless Steel");
        let cs = known("Carbon Steel");

        assert_eq!(
            c.specification(5.2, Some(1.5), &ss),
            "Above Ground Small Bore Pipe (All-In) (Stainless Steel)"
        );
        assert_eq!(
            c.specification(5.2, Some(1.5), &Material::Missing),
            "Above Ground Small Bore Pipe (All-In) (0-2\")"
        );
        assert_eq!(
            c.specification(5.2, Some(10.0), &cs),
            "Above Ground Large Bore Pipe (Carbon Steel) (8\"-12\" Diameter)"
        );
        assert_eq!(
            c.specification(5.2, None, &cs),
            "Above Ground Large Bore Pipe"
        );
        assert_eq!(
            c.specification(-3.5, Some(0.75), &cs),
            "Underground Small Bore Pipe - Carbon Steel"
        );
        assert_eq!(
            c.specification(0.0, Some(0.75), &Material::Unrecognized("XX".into())),
            "Underground Small Bore Pipe"
        );
        assert_eq!(
            c.specification(-1.0, Some(14.0), &ss),
            "Underground Large Bore Pipe (Stainless Steel) (14\"-24\" Diameter)"
        );
        assert_eq!(
            c.specification(-1.0, Some(14.0), &Material::Missing),
            "Underground Large Bore Pipe"
        );
    }

    #[test]
    fn test_small_bore_range_follows_first_bucket() {
        let mut cfg = Config::default();
        cfg.small_bore.value = 3.0;
        cfg.size_buckets[0] = SizeBucket {
            label: "0-3\"".to_string(),
            upper: Some(3.0),
        };
        let c = Classifier::new(&cfg);
        assert_eq!(
            c.specification(1.0, Some(3.0), &Material::Missing),
            "Above Ground Small Bore Pipe (All-In) (0-3\")"
        );
    }

    #[test]
    fn test_unknown_material_and_size_still_describe() {
        let cfg = Config::default();
        let c = Classifier::new(&cfg);
        let s = c.specification(0.0, None, &Material::Unrecognized("??".into()));
        assert_eq!(s, "Underground Large Bore Pipe");
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(
            missing_values(&["Material", "Size"]),
            "Missing values: Material, Size"
        );
    }
}
