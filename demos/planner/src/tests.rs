//! Tests for the wayfare binary's argument handling and bundled dataset.

#[cfg(test)]
mod cli {
    use clap::Parser;

    use wf_core::Metric;
    use crate::Cli;

    #[test]
    fn defaults_point_at_bundled_dataset() {
        let cli = Cli::try_parse_from(["wayfare", "--from", "Pune"]).unwrap();
        assert!(cli.cities.is_absolute());
        assert!(cli.routes.is_absolute());
        assert!(cli.cities.is_file(), "{}", cli.cities.display());
        assert!(cli.routes.is_file(), "{}", cli.routes.display());
        assert_eq!(cli.metric, Metric::Distance);
        assert!(cli.to.is_none());
    }

    #[test]
    fn metric_flag_is_case_insensitive() {
        let cli = Cli::try_parse_from(["wayfare", "--from", "Pune", "--to", "Goa", "--metric", "COST"])
            .unwrap();
        assert_eq!(cli.metric, Metric::Cost);
        assert!(Cli::try_parse_from(["wayfare", "--from", "Pune", "--metric", "time"]).is_err());
    }
}

#[cfg(test)]
mod dataset {
    use std::path::Path;

    use wf_core::Metric;
    use wf_data::load_graph;
    use wf_trip::TripPlanner;
    use crate::{DEFAULT_CITIES, DEFAULT_ROUTES};

    fn planner() -> TripPlanner {
        TripPlanner::new(load_graph(Path::new(DEFAULT_CITIES), Path::new(DEFAULT_ROUTES)).unwrap())
    }

    #[test]
    fn bundled_dataset_plans_trips() {
        let p = planner();
        assert_eq!(p.graph().location_count(), 12);
        let r = p.plan("New Delhi", "Chennai", Metric::Cost).unwrap();
        assert!(r.valid);
        assert_eq!(r.path.first().unwrap().as_str(), "New Delhi");
        assert_eq!(r.path.last().unwrap().as_str(), "Chennai");
    }

    #[test]
    fn isolated_city_has_no_route() {
        let r = planner().plan("Mumbai", "Port Blair", Metric::Distance).unwrap();
        assert!(!r.valid);
        assert!(planner().reachable("Port Blair").unwrap().is_empty());
    }
}
