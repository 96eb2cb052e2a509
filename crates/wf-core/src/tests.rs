//! Unit tests for wf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeIdx, LocationId, LocationIdx};

    #[test]
    fn index_roundtrip() {
        let idx = LocationIdx(42);
        assert_eq!(idx.index(), 42);
        assert_eq!(LocationIdx::try_from(42usize).unwrap(), idx);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(LocationIdx::INVALID.0, u32::MAX);
        assert_eq!(EdgeIdx::INVALID.0, u32::MAX);
        assert_eq!(EdgeIdx::default(), EdgeIdx::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(LocationIdx(7).to_string(), "LocationIdx(7)");
        assert_eq!(LocationId::from("Pune").to_string(), "Pune");
    }

    #[test]
    fn location_ids_are_case_sensitive() {
        assert_ne!(LocationId::from("goa"), LocationId::from("Goa"));
        // Byte-wise ordering: uppercase sorts before lowercase.
        assert!(LocationId::from("Goa") < LocationId::from("goa"));
    }

    #[test]
    fn borrow_as_str_for_map_lookup() {
        use std::collections::HashMap;
        let mut m = HashMap::new();
        m.insert(LocationId::from("Chennai"), 1);
        assert_eq!(m.get("Chennai"), Some(&1));
    }
}

#[cfg(test)]
mod geo {
    use crate::{CoreError, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.6139, 77.2090);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.19 km
        let a = GeoPoint::new(20.0, 77.0);
        let b = GeoPoint::new(21.0, 77.0);
        let d = a.distance_km(b);
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    #[test]
    fn delhi_mumbai_distance() {
        let delhi  = GeoPoint::new(28.6139, 77.2090);
        let mumbai = GeoPoint::new(19.0760, 72.8777);
        let d = delhi.distance_km(mumbai);
        assert!((d - 1_148.1).abs() < 1.0, "got {d}");
    }

    #[test]
    fn range_validation() {
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
        assert_eq!(
            GeoPoint::try_new(90.5, 0.0),
            Err(CoreError::InvalidCoordinates { lat: 90.5, lon: 0.0 })
        );
        assert!(GeoPoint::try_new(0.0, -180.1).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
    }
}

#[cfg(test)]
mod metric {
    use crate::{CoreError, Metric};

    #[test]
    fn parse_labels() {
        assert_eq!("distance".parse::<Metric>().unwrap(), Metric::Distance);
        assert_eq!(" Cost ".parse::<Metric>().unwrap(), Metric::Cost);
        assert_eq!(
            "time".parse::<Metric>(),
            Err(CoreError::UnknownMetric("time".into()))
        );
    }

    #[test]
    fn label_roundtrip() {
        for m in Metric::ALL {
            assert_eq!(m.as_str().parse::<Metric>().unwrap(), m);
            assert_eq!(m.to_string(), m.as_str());
        }
    }

    #[test]
    fn select_picks_weight() {
        assert_eq!(Metric::Distance.select(100.0, 50.0), 100.0);
        assert_eq!(Metric::Cost.select(100.0, 50.0), 50.0);
    }

    #[test]
    fn default_is_distance() {
        assert_eq!(Metric::default(), Metric::Distance);
    }
}
