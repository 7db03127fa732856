osm_category! {
    pub enum Footway ("footway") {
        Sidewalk => "sidewalk",
        Crossing => "crossing",
        TrafficIsland => "traffic_island",
        AccessAisle => "access_aisle",
        Link => "link",
    }
}
