//! impact classes for reduced-mobility pedestrians (PAM).
use super::{ImpactClass, ProfileImpact};
use crate::model::category::{Highway, Smoothness, Surface};
use crate::model::tag::Incline;

pub const PAM_IMPACT: ProfileImpact = ProfileImpact {
    width,
    surface,
    smoothness,
    highway,
    incline,
    ressaut_max,
    ..ProfileImpact::NO_IMPACT
};

fn width(meters: f64) -> ImpactClass {
    if meters < 0.8 {
        ImpactClass::Moderate
    } else if meters < 1.2 {
        ImpactClass::Low
    } else if meters < 100.0 {
        ImpactClass::NoImpact
    } else {
        // implausible width, likely a tagging error
        ImpactClass::Moderate
    }
}

fn surface(surface: Surface) -> ImpactClass {
    use Surface as S;
    match surface {
        S::Paved
        | S::Asphalt
        | S::Chipseal
        | S::Concrete
        | S::ConcreteLanes
        | S::Metal
        | S::Rubber
        | S::Clay
        | S::Tartan
        | S::ArtificialTurf
        | S::Acrylic
        | S::Carpet => ImpactClass::NoImpact,
        S::ConcretePlates
        | S::PavingStones
        | S::Sett
        | S::Wood
        | S::Unpaved
        | S::Compacted
        | S::FineGravel => ImpactClass::Low,
        S::Cobblestone
        | S::UnhewnCobblestone
        | S::SteppingStones
        | S::Gravel
        | S::Pebblestone
        | S::Ground
        | S::Dirt
        | S::Earth
        | S::Grass
        | S::GrassPaver
        | S::MetalGrid
        | S::Mud
        | S::Sand
        | S::Woodchips
        | S::Snow
        | S::Ice => ImpactClass::High,
        S::Rock => ImpactClass::Severe,
    }
}

fn smoothness(smoothness: Smoothness) -> ImpactClass {
    match smoothness {
        Smoothness::Excellent | Smoothness::Good => ImpactClass::NoImpact,
        Smoothness::Intermediate => ImpactClass::Low,
        Smoothness::Bad => ImpactClass::Moderate,
        Smoothness::VeryBad => ImpactClass::High,
        Smoothness::Horrible | Smoothness::VeryHorrible | Smoothness::Impassable => {
            ImpactClass::Severe
        }
    }
}

fn highway(highway: Highway) -> ImpactClass {
    match highway {
        Highway::Steps => ImpactClass::Low,
        _ => ImpactClass::NoImpact,
    }
}

fn incline(incline: Incline) -> ImpactClass {
    let Some(percent) = incline.percent() else {
        return ImpactClass::NoImpact;
    };
    let slope = percent.abs();
    if slope <= 4.0 {
        ImpactClass::NoImpact
    } else if slope <= 7.0 {
        ImpactClass::Low
    } else if slope <= 11.0 {
        ImpactClass::Moderate
    } else {
        ImpactClass::High
    }
}

fn ressaut_max(height: f64) -> ImpactClass {
    // flush curb
    if height == 0.0 {
        ImpactClass::Moderate
    } else if height <= 0.02 {
        ImpactClass::NoImpact
    } else if height <= 0.06 {
        ImpactClass::Low
    } else {
        ImpactClass::Moderate
    }
}
