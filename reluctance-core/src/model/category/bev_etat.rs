osm_category! {
    /// condition of a tactile warning strip (`wgt:bev_etat`), from best to worst.
    pub enum BevEtat ("bev_etat") {
        Yes => "yes",
        Bad => "bad",
        No => "no",
    }
}
