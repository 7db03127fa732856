osm_category! {
    /// values of the OSM `surface` key.
    pub enum Surface ("surface") {
        Paved => "paved",
        Asphalt => "asphalt",
        Chipseal => "chipseal",
        Concrete => "concrete",
        ConcreteLanes => "concrete_lanes" as "concrete:lane",
        ConcretePlates => "concrete_plates" as "concrete:plates",
        Metal => "metal",
        PavingStones => "paving_stones",
        Sett => "sett",
        Cobblestone => "cobblestone",
        UnhewnCobblestone => "unhewn_cobblestone",
        Wood => "wood",
        SteppingStones => "stepping_stones",
        Rubber => "rubber",
        Unpaved => "unpaved",
        Compacted => "compacted",
        FineGravel => "fine_gravel",
        Gravel => "gravel",
        Rock => "rock",
        Pebblestone => "pebblestone",
        Ground => "ground",
        Dirt => "dirt",
        Earth => "earth",
        Grass => "grass",
        GrassPaver => "grass_paver",
        MetalGrid => "metal_grid",
        Mud => "mud",
        Sand => "sand",
        Woodchips => "woodchips",
        Snow => "snow",
        Ice => "ice",
        Clay => "clay",
        Tartan => "tartan",
        ArtificialTurf => "artificial_turf",
        Acrylic => "acrylic",
        Carpet => "carpet",
    }
}
