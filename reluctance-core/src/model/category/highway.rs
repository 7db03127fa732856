osm_category! {
    /// the subset of OSM `highway` values relevant to pedestrians.
    pub enum Highway ("highway") {
        Any => "any",
        Pedestrian => "pedestrian",
        Footway => "footway",
        Steps => "steps",
        Elevator => "elevator",
        Corridor => "corridor",
        Residential => "residential",
    }
}
