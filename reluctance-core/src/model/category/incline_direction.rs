osm_category! {
    pub enum InclineDirection ("incline direction") {
        Up => "up",
        Down => "down",
    }
}
