osm_category! {
    /// values of the OSM `smoothness` key, from best to worst.
    pub enum Smoothness ("smoothness") {
        Excellent => "excellent",
        Good => "good",
        Intermediate => "intermediate",
        Bad => "bad",
        VeryBad => "very_bad",
        Horrible => "horrible",
        VeryHorrible => "very_horrible",
        Impassable => "impassable",
    }
}

#[cfg(test)]
mod tests {
    use super::Smoothness;

    #[test]
    fn ordered_best_to_worst() {
        assert!(Smoothness::Excellent < Smoothness::Good);
        assert!(Smoothness::Bad < Smoothness::VeryBad);
        assert!(Smoothness::VeryHorrible < Smoothness::Impassable);
    }
}
